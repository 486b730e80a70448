use thiserror::Error;
use crate::app_system::TicketingError;
use crate::user::UserError;

/// Input and lookup errors shown to the person at the desk.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeskError {
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("Please select a payment method.")]
    MissingPaymentMethod,
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
    #[error("Please select a ticket.")]
    MissingTicket,
    #[error("User ID not found.")]
    UserNotFound,
    #[error("Fan not found.")]
    FanNotFound,
    #[error("Admin not found.")]
    AdminNotFound,
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Ticketing(#[from] TicketingError),
}
