use thiserror::Error;

/// Unified error type for bump-detect operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version arithmetic failed: {0}")]
    Arithmetic(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-detect
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create an arithmetic error with context
    pub fn arithmetic(msg: impl Into<String>) -> Self {
        BumpError::Arithmetic(msg.into())
    }

    /// Whether this error came from user-supplied configuration
    pub fn is_config(&self) -> bool {
        matches!(self, BumpError::Config(_))
    }
}
