//! Error types for chm-stub

use thiserror::Error;

/// Stub loading and rendering errors
#[derive(Error, Debug)]
pub enum StubError {
    /// Stub file is not available from the source (S001)
    #[error("[S001] Stub not found: {stub}")]
    NotFound { stub: String },

    /// Stub file exists but could not be read (S002)
    #[error("[S002] Failed to read stub '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Template render error (S003)
    #[error("[S003] Stub render error: {0}")]
    Render(String),
}

/// Result type alias for StubError
pub type StubResult<T> = Result<T, StubError>;

impl From<minijinja::Error> for StubError {
    fn from(err: minijinja::Error) -> Self {
        StubError::Render(err.to_string())
    }
}
