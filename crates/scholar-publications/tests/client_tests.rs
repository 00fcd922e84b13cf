//! Semantic Scholar adapter tests against a wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_publications::client::SemanticScholarClient;
use scholar_publications::config::Config;
use scholar_publications::error::ClientError;
use scholar_publications::models::{PubYear, ScholarPublication};
use scholar_publications::source::ScholarSource;

fn setup_client(mock_server: &MockServer) -> SemanticScholarClient {
    SemanticScholarClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

fn sample_author_json() -> serde_json::Value {
    json!({
        "authorId": "1741101",
        "name": "Charles Abdoulaye Ngom",
        "affiliations": ["INRAE"],
        "citationCount": 48,
        "hIndex": 4,
        "paperCount": 3
    })
}

fn summary_paper(id: &str, title: &str, year: i32, citations: i32) -> serde_json::Value {
    json!({"paperId": id, "title": title, "year": year, "citationCount": citations})
}

// =============================================================================
// Author resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_author_maps_basics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_author_json()))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let author = client.resolve_author("1741101").await.unwrap();

    assert_eq!(author.scholar_id, "1741101");
    assert_eq!(author.name.as_deref(), Some("Charles Abdoulaye Ngom"));
    assert_eq!(author.affiliation.as_deref(), Some("INRAE"));
    assert_eq!(author.citedby, Some(48));
    assert_eq!(author.hindex, Some(4));
    assert!(author.publications.is_empty());
    assert!(!author.filled);
}

#[tokio::test]
async fn test_resolve_author_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Author not found"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.resolve_author("missing").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_rate_limit_reports_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_string("Too Many Requests"),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.resolve_author("1741101").await.unwrap_err();

    assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.resolve_author("1741101").await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/x"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_author_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config =
        Config::for_testing(&mock_server.uri()).with_request_timeout(Duration::from_millis(200));
    let client = SemanticScholarClient::new(config).unwrap();
    let err = client.resolve_author("x").await.unwrap_err();

    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_timeout_survives_exhausted_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/x"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_author_json())
                .set_delay(Duration::from_secs(3)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri())
        .with_request_timeout(Duration::from_millis(200))
        .with_max_retries(1);
    let client = SemanticScholarClient::new(config).unwrap();
    let err = client.resolve_author("x").await.unwrap_err();

    assert!(
        matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(200)),
        "got {err:?}"
    );
    assert!(err.is_retryable());
}

// =============================================================================
// Author expansion
// =============================================================================

#[tokio::test]
async fn test_expand_author_follows_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101/papers"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "next": 2,
            "data": [
                summary_paper("p1", "First", 2023, 12),
                summary_paper("p2", "Second", 2022, 3)
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101/papers"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 2,
            "data": [summary_paper("p3", "Third", 2021, 40)]
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri()).with_page_size(2);
    let client = SemanticScholarClient::new(config).unwrap();

    let author = scholar_publications::models::ScholarAuthor {
        scholar_id: "1741101".to_string(),
        ..Default::default()
    };
    let author = client.expand_author(author).await.unwrap();

    let ids: Vec<_> =
        author.publications.iter().map(|p| p.source_id.as_deref().unwrap()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    assert!(author.filled);
    assert!(author.publications.iter().all(|p| !p.filled));
    // p1 (12) and p3 (40) have at least ten citations
    assert_eq!(author.i10index, Some(2));
}

#[tokio::test]
async fn test_expand_author_listing_failure_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101/papers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let author = scholar_publications::models::ScholarAuthor {
        scholar_id: "1741101".to_string(),
        ..Default::default()
    };
    let err = client.expand_author(author).await.unwrap_err();

    assert!(matches!(err, ClientError::Server { status: 500, .. }), "got {err:?}");
}

// =============================================================================
// Publication expansion
// =============================================================================

#[tokio::test]
async fn test_expand_publication_maps_detail_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p1",
            "title": "Crop yield forecasting with transformers",
            "abstract": "We forecast yields.",
            "year": 2023,
            "citationCount": 12,
            "authors": [{"authorId": "1", "name": "C. A. Ngom"}, {"authorId": "2", "name": "M. Dupré"}],
            "venue": "Computers and Electronics in Agriculture",
            "journal": {"name": "Computers and Electronics in Agriculture", "volume": "210"},
            "publicationVenue": {"id": "v", "name": "Computers and Electronics in Agriculture", "type": "journal"},
            "url": "https://www.semanticscholar.org/paper/p1",
            "openAccessPdf": {"url": "https://hal.science/p1.pdf", "status": "GREEN"}
        })))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let listed = ScholarPublication { source_id: Some("p1".to_string()), ..Default::default() };
    let expanded = client.expand_publication(&listed).await.unwrap();

    assert!(expanded.filled);
    assert_eq!(expanded.bib.title.as_deref(), Some("Crop yield forecasting with transformers"));
    assert_eq!(expanded.bib.author.as_deref(), Some("C. A. Ngom, M. Dupré"));
    assert_eq!(expanded.bib.pub_year, Some(PubYear::Number(2023)));
    assert_eq!(expanded.bib.journal.as_deref(), Some("Computers and Electronics in Agriculture"));
    assert!(expanded.bib.conference.is_none());
    assert_eq!(expanded.num_citations, Some(12));
    assert_eq!(expanded.pub_url.as_deref(), Some("https://www.semanticscholar.org/paper/p1"));
    assert_eq!(expanded.eprint_url.as_deref(), Some("https://hal.science/p1.pdf"));
}

#[tokio::test]
async fn test_expand_publication_without_id_fails_without_request() {
    let mock_server = MockServer::start().await;

    let client = setup_client(&mock_server);
    let err = client.expand_publication(&ScholarPublication::default()).await.unwrap_err();

    assert!(matches!(err, ClientError::BadRequest { .. }), "got {err:?}");
    assert!(mock_server.received_requests().await.unwrap_or_default().is_empty());
}

// =============================================================================
// Client behavior
// =============================================================================

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new(Some("super-secret-key".to_string()));
    let client = SemanticScholarClient::new(config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
    assert!(client.has_api_key());
}
