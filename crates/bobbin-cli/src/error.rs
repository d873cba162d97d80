//! Error types for bobbin-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bobbin-core
    #[error(transparent)]
    Core(#[from] bobbin_core::Error),

    /// Error from bobbin-fs
    #[error(transparent)]
    Fs(#[from] bobbin_fs::Error),

    /// HTTP client could not be built
    #[error(transparent)]
    Http(#[from] bobbin_http::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
