use std::path::Path;
use thiserror::Error;

/// Errors raised while reading or writing saved state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
    #[error("Malformed data in {path}: {message}")]
    Serialization { path: String, message: String },
}

impl PersistenceError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn serialization(path: &Path, err: serde_json::Error) -> Self {
        PersistenceError::Serialization {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
