use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Ticket not found: {0}")]
    NotFound(String),
    #[error("Ticket validation error: {0}")]
    ValidationError(String),
}
