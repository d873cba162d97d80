//! HTTP fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::fetcher::{FetchResult, Fetcher};
use crate::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("bobbin/", env!("CARGO_PKG_VERSION"));

/// Settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Whole-request timeout, connect through body
    pub timeout: Duration,
    pub user_agent: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    pub use_system_proxy: bool,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            use_system_proxy: true,
        }
    }
}

/// Issues one GET per URL and returns the raw body.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Create a fetcher with default timeout and user agent.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpFetcherConfig::default())
    }

    pub fn with_config(config: HttpFetcherConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(Error::ClientBuild)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        debug!(url = %url, "Fetching");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchResult::NetworkError(describe_transport_error(&e)),
        };

        let status = response.status();
        if !status.is_success() {
            return FetchResult::HttpError(format!(
                "HTTP/1.1 {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            ));
        }

        match response.bytes().await {
            Ok(body) => {
                debug!(url = %url, size = body.len(), "Fetched");
                FetchResult::Success(body.to_vec())
            }
            Err(e) => FetchResult::NetworkError(describe_transport_error(&e)),
        }
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Cannot connect to destination host: {error}")
    } else if error.is_builder() {
        format!("Invalid request URL: {error}")
    } else {
        error.to_string()
    }
}
