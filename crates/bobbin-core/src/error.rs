//! Error types for bobbin-core

/// Result type for bobbin-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bobbin-core operations
///
/// Problems with a single entry during a run are not errors at this level;
/// they are recorded as [`crate::EntryError`] in the run report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No entry matched an id or name
    #[error("No sync entry matches '{query}'")]
    EntryNotFound { query: String },

    /// A settings value was rejected
    #[error("Invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from bobbin-fs
    #[error(transparent)]
    Fs(#[from] bobbin_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
