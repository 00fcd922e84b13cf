//! Configuration for the Semantic Scholar source and the publication pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay before each request without API key (1s, the public pool limit).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(1);

    /// Delay before each request with API key (10ms = 100 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(10);

    /// Retries for transient failures (5xx, timeouts, connection resets).
    pub const MAX_RETRIES: u32 = 3;

    /// Page size for `/author/{id}/papers`. The API caps this at 1000.
    pub const PAGE_SIZE: u32 = 100;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field sets requested from the Graph API.
pub mod fields {
    /// Basic author profile fields.
    pub const AUTHOR_BASICS: &[&str] =
        &["authorId", "name", "affiliations", "citationCount", "hIndex", "paperCount"];

    /// Summary fields for the author's publication listing.
    pub const PAPER_SUMMARY: &[&str] = &["paperId", "title", "year", "citationCount"];

    /// Full detail for a single publication.
    pub const PAPER_DETAIL: &[&str] = &[
        "paperId",
        "title",
        "abstract",
        "year",
        "citationCount",
        "authors",
        "venue",
        "journal",
        "publicationVenue",
        "url",
        "openAccessPdf",
    ];
}

/// Default location of the generated document, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/publications.json";

/// HTTP source configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay before each request.
    pub rate_limit_delay: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Page size for the author papers listing.
    pub page_size: u32,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The request delay is shortened when a key is present.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let rate_limit_delay = if api_key.is_some() {
            api::RATE_LIMIT_DELAY_WITH_KEY
        } else {
            api::RATE_LIMIT_DELAY
        };

        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay,
            max_retries: api::MAX_RETRIES,
            page_size: api::PAGE_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::ZERO,
            max_retries: 0,
            page_size: api::PAGE_SIZE,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`; an empty value counts as unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        Ok(Self::new(api_key))
    }

    /// Override the retry count.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Point at a different Graph API base URL (a mirror or a mock server).
    #[must_use]
    pub fn with_graph_api_url(mut self, url: impl Into<String>) -> Self {
        self.graph_api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the listing page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

/// What to fetch and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Author identifier understood by the data source.
    pub author_id: String,

    /// Path of the JSON document to (over)write.
    pub output_path: PathBuf,
}

impl PipelineConfig {
    /// Configuration writing to [`DEFAULT_OUTPUT_PATH`].
    #[must_use]
    pub fn new(author_id: impl Into<String>) -> Self {
        Self { author_id: author_id.into(), output_path: PathBuf::from(DEFAULT_OUTPUT_PATH) }
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
