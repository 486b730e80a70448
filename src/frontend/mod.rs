//! UI-free front-end workflows.
//!
//! Each desk does the input checks a screen would do before it calls the
//! ticketing service: duplicate ids, quantity parsing, payment selection and
//! login by user kind.

pub mod account_desk;
pub mod booking_desk;
pub mod admin_desk;
pub mod error;

pub use account_desk::*;
pub use booking_desk::*;
pub use admin_desk::*;
pub use error::*;
