use thiserror::Error;

/// Unified error type for release-bump operations
#[derive(Error, Debug)]
pub enum ReleaseBumpError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-bump
pub type Result<T> = std::result::Result<T, ReleaseBumpError>;

impl ReleaseBumpError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Version(msg.into())
    }

    /// Create an invalid-state error with context
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        ReleaseBumpError::InvalidState(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Config(msg.into())
    }
}
