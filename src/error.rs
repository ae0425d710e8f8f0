//! Error types for the endcard renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serving endcards
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an asset or write an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A mode was invoked without the assets it requires
    #[error("Missing required asset: {0}")]
    MissingAsset(String),

    /// Upload rejected by the intake policy
    #[error("Invalid file type. Allowed types: {0}")]
    UnsupportedExtension(String),

    /// Upload rejected because it exceeds the configured ceiling
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// An orientation-mode string that the renderer does not recognize
    #[error("Invalid orientation mode: {0}")]
    InvalidMode(String),

    /// Metadata record could not be serialized or parsed
    #[error("Record serialization failed: {0}")]
    RecordError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
