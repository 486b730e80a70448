//! Handles used by front-ends to talk to the ticketing service.

#[macro_use]
mod macros;
pub mod ticketing_client;

pub use ticketing_client::*;
