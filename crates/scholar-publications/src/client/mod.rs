//! Semantic Scholar API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff for transient failures
//! - A fixed delay before every request to stay under the public rate limit
//!
//! Requests are issued one at a time; nothing is cached between calls.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::debug;

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Author, AuthorPapersResult, Paper, ScholarAuthor, ScholarPublication, i10_index,
};
use crate::source::ScholarSource;

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Delay before each request.
    rate_limit_delay: Duration,

    /// Reported when a request times out.
    request_timeout: Duration,

    /// Page size for the author papers listing.
    page_size: u32,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or HTTP client
    /// initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            rate_limit_delay: config.rate_limit_delay,
            request_timeout: config.request_timeout,
            page_size: config.page_size,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get an author by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<Author> {
        let url = format!("{}/author/{}", self.graph_api_url, author_id);
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get one page of an author's papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        offset: i32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorPapersResult> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);

        let params = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get every paper of an author, following `next` offsets.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_all_author_papers(
        &self,
        author_id: &str,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let mut papers = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.get_author_papers(author_id, offset, self.page_size, fields).await?;
            let received = page.data.len();
            papers.extend(page.data);

            match page.next {
                Some(next) if received > 0 && next > offset => offset = next,
                _ => break,
            }
        }

        debug!(author_id, count = papers.len(), "Listed author papers");
        Ok(papers)
    }

    /// Get a single paper by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        debug!(url, "GET");
        let response = match self.client.get(url).query(params).send().await {
            Ok(response) => response,
            Err(e) if is_timeout(&e) => return Err(ClientError::Timeout(self.request_timeout)),
            Err(e) => return Err(e.into()),
        };

        let response = Self::handle_response(response).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

/// Whether a send failure was caused by a timeout.
///
/// Once retries are exhausted the retry middleware wraps the last error in
/// `RetryError`, so the cause has to be found in the chain.
fn is_timeout(err: &reqwest_middleware::Error) -> bool {
    match err {
        reqwest_middleware::Error::Reqwest(e) => e.is_timeout(),
        reqwest_middleware::Error::Middleware(inner) => inner.chain().any(|cause| {
            cause.downcast_ref::<reqwest::Error>().is_some_and(reqwest::Error::is_timeout)
                || cause.downcast_ref::<reqwest_middleware::Error>().is_some_and(is_timeout)
        }),
    }
}

#[async_trait::async_trait]
impl ScholarSource for SemanticScholarClient {
    async fn resolve_author(&self, author_id: &str) -> ClientResult<ScholarAuthor> {
        let author = self.get_author(author_id, fields::AUTHOR_BASICS).await?;
        Ok(author.into())
    }

    async fn expand_author(&self, mut author: ScholarAuthor) -> ClientResult<ScholarAuthor> {
        let papers = self.get_all_author_papers(&author.scholar_id, fields::PAPER_SUMMARY).await?;

        author.publications = papers.into_iter().map(ScholarPublication::from).collect();
        // The Graph API has no i10-index; derive it from the listing's citation counts.
        if author.i10index.is_none() {
            author.i10index = Some(i10_index(&author.publications));
        }
        author.filled = true;

        Ok(author)
    }

    async fn expand_publication(
        &self,
        publication: &ScholarPublication,
    ) -> ClientResult<ScholarPublication> {
        let paper_id = publication
            .source_id
            .as_deref()
            .ok_or_else(|| ClientError::bad_request("publication has no paper id"))?;

        let paper = self.get_paper(paper_id, fields::PAPER_DETAIL).await?;
        let mut expanded = ScholarPublication::from(paper);
        expanded.filled = true;

        Ok(expanded)
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
