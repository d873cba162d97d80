//! Error types for bobbin-http

/// Result type for bobbin-http operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up an HTTP fetcher
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
