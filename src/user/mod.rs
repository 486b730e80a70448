//! User registry records.

pub mod entity;
pub mod error;

pub use error::*;
