use thiserror::Error;
use crate::persistence::PersistenceError;
use crate::ticket::CatalogError;
use crate::ticketing::BookingError;
use crate::user::UserError;

/// Errors returned to callers of the ticketing service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TicketingError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Failed to save changes: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
