pub mod user;
pub mod ticket;
pub mod booking;
pub mod payment;

pub use user::*;
pub use ticket::*;
pub use booking::*;
pub use payment::*;
