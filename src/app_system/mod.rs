//! Service startup, request handling and shutdown.

pub mod ticketing_service;
pub mod booking_system;
pub mod tracing;
pub mod error;

pub use ticketing_service::*;
pub use booking_system::*;
pub use self::tracing::*;
pub use error::*;
