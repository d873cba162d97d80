//! Fetcher trait and fetch outcomes

use async_trait::async_trait;

/// Outcome of fetching a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered with a success status; the body is attached
    Success(Vec<u8>),
    /// The server answered, but with an error status
    HttpError(String),
    /// No usable answer: DNS, connect, TLS, timeout or body read failure
    NetworkError(String),
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Message for the failure variants, `None` on success.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::HttpError(message) | Self::NetworkError(message) => Some(message),
        }
    }
}

/// Retrieves the body of a URL.
///
/// Implementations never panic or return early on failure; every problem
/// is folded into a [`FetchResult`] variant so callers can keep going.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for &F {
    async fn fetch(&self, url: &str) -> FetchResult {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    async fn fetch(&self, url: &str) -> FetchResult {
        (**self).fetch(url).await
    }
}
