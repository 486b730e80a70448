use thiserror::Error;

/// Errors that can occur while creating a booking.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Invalid Ticket ID: {0}")]
    InvalidTicket(String),
    #[error("Fan not found: {0}")]
    NotAFan(String),
}
