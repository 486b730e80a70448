use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::{PaymentMethod, Ticket};

/// Quantity at which the bulk discount starts.
pub const BULK_DISCOUNT_THRESHOLD: u32 = 5;
/// Multiplier applied to bulk bookings.
pub const BULK_DISCOUNT_FACTOR: f64 = 0.9;

/// One purchase of a ticket type by a fan. Never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub fan_id: String,
    pub ticket_id: String,
    pub ticket_type: String,
    pub quantity: u32,
    pub payment_method: PaymentMethod,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Builds a booking and freezes its total. Touches nothing else.
    pub fn new(
        id: impl Into<String>,
        fan_id: impl Into<String>,
        ticket: &Ticket,
        quantity: u32,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: id.into(),
            fan_id: fan_id.into(),
            ticket_id: ticket.id.clone(),
            ticket_type: ticket.ticket_type.clone(),
            quantity,
            payment_method,
            total_price: calculate_total(ticket.price, quantity),
            created_at: Utc::now(),
        }
    }
}

/// `unit_price * quantity`, with 10% off from five tickets up.
pub fn calculate_total(unit_price: f64, quantity: u32) -> f64 {
    let base_total = unit_price * f64::from(quantity);
    if quantity >= BULK_DISCOUNT_THRESHOLD {
        base_total * BULK_DISCOUNT_FACTOR
    } else {
        base_total
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking[{}] - {} x {} on {} | Payment: {} | Total: AED {:.2}",
            self.id,
            self.ticket_type,
            self.quantity,
            self.created_at.format("%Y-%m-%d"),
            self.payment_method,
            self.total_price
        )
    }
}
