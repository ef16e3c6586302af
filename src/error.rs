use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sessionhop operations
#[derive(Error, Debug)]
pub enum SessionhopError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while validating a preset before generation
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("source '{source}' requires a key, but none was provided")]
    MissingKey { r#source: String },

    #[error("source '{source}' requires a non-empty key")]
    EmptyKey { r#source: String },

    #[error("no preset with id '{id}'")]
    UnknownPreset { id: String },

    #[error("'{id}' is a built-in preset and cannot be deleted")]
    BuiltinImmutable { id: String },
}

/// Errors raised by the session simulation (dry-run capture)
#[derive(Error, Debug, PartialEq)]
pub enum CaptureError {
    #[error("key '{key}' not found in {mechanism}")]
    KeyNotFound { key: String, mechanism: String },
}

/// Errors raised by the persistent state store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access store at {path:?}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("store entry '{key}' is corrupted: {message}")]
    Corrupted { key: String, message: String },

    #[error("no data directory could be resolved for this platform")]
    NoDataDir,
}

/// Result type alias for sessionhop operations
pub type SessionhopResult<T> = Result<T, SessionhopError>;
