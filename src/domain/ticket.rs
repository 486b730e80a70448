use std::fmt;
use serde::{Deserialize, Serialize};

/// How long a ticket is valid for and what it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketClass {
    SingleDay,
    Weekend,
    Season,
}

impl TicketClass {
    pub fn validity(&self) -> &'static str {
        match self {
            TicketClass::SingleDay => "Single day",
            TicketClass::Weekend => "3 days",
            TicketClass::Season => "All season",
        }
    }

    pub fn features(&self) -> &'static str {
        match self {
            TicketClass::SingleDay => "Access to main event",
            TicketClass::Weekend => "All races + Pit access",
            TicketClass::Season => "All-season VIP access",
        }
    }
}

/// A purchasable ticket type in the catalog. Not an individual seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    /// Free-text label, also the key for sales aggregation.
    pub ticket_type: String,
    pub class: TicketClass,
    pub price: f64,
}

/// Payload for updating a catalog entry.
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub price: Option<f64>,
}

impl Ticket {
    pub fn new(id: impl Into<String>, ticket_type: impl Into<String>, class: TicketClass, price: f64) -> Self {
        Self {
            id: id.into(),
            ticket_type: ticket_type.into(),
            class,
            price,
        }
    }

    /// Multi-line description used when listing available tickets.
    pub fn description(&self) -> String {
        format!(
            "{} - AED {}\nValidity: {}\nFeatures: {}",
            self.ticket_type,
            self.price,
            self.class.validity(),
            self.class.features()
        )
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket[{}] {} - AED {}", self.id, self.ticket_type, self.price)
    }
}
