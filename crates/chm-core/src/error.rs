//! Error types for chm-core

use chm_stub::StubError;
use thiserror::Error;

/// Core error type for chmigrate
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Migration name is empty after normalization
    #[error("[M001] Invalid migration name '{raw}': name must contain at least one letter or digit")]
    InvalidName { raw: String },

    /// M002: Stub template is missing
    #[error("[M002] Stub not found: {stub}")]
    StubNotFound { stub: String },

    /// M003: Migrations directory does not exist
    #[error("[M003] Migrations directory not found: {path}. Create it first or pass --path")]
    DirectoryNotFound { path: String },

    /// M004: A file already exists at the generated path
    #[error("[M004] Migration file already exists: {path}")]
    FileAlreadyExists { path: String },

    /// M005: Another migration already uses the same class name
    #[error("[M005] A {class} migration already exists: {existing}")]
    DuplicateMigration { class: String, existing: String },

    /// M006: Failed to write the migration file
    #[error("[M006] Failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// M007: Stub could not be read or rendered
    #[error("[M007] {0}")]
    Stub(StubError),

    /// M008: IO error with path context
    #[error("[M008] Failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Failed to parse configuration file
    #[error("[C002] Failed to parse config: {message}")]
    ConfigParse { message: String },

    /// C003: Invalid configuration value
    #[error("[C003] Invalid config: {message}")]
    ConfigInvalid { message: String },
}

impl From<StubError> for CoreError {
    fn from(err: StubError) -> Self {
        match err {
            StubError::NotFound { stub } => CoreError::StubNotFound { stub },
            other => CoreError::Stub(other),
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
