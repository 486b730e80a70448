//! Booking workflow over the user registry, ticket catalog and booking ledger.

pub mod coordinator;
pub mod error;

pub use coordinator::*;
pub use error::*;
