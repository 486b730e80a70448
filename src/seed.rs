//! Sample records written on first run.

use tracing::info;
use crate::domain::{Ticket, TicketClass, User};
use crate::ticketing::TicketingCoordinator;

pub const DEFAULT_ADMIN_ID: &str = "1234";

pub fn default_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new("T001", "Single Race Pass", TicketClass::SingleDay, 350.0),
        Ticket::new("T002", "Weekend Package", TicketClass::Weekend, 900.0),
        Ticket::new("T003", "Season Membership", TicketClass::Season, 3000.0),
        // Displayed with season validity before classes were explicit.
        Ticket::new("T004", "Group Discount (5+)", TicketClass::Season, 320.0),
    ]
}

pub fn default_admin() -> User {
    User::admin(DEFAULT_ADMIN_ID, "AdminUser", "admin@example.com")
}

/// Adds the default tickets to an empty catalog and the default admin if
/// missing. Returns whether anything changed.
pub fn seed_defaults(coordinator: &mut TicketingCoordinator) -> bool {
    let mut changed = false;

    if coordinator.tickets().is_empty() {
        for ticket in default_tickets() {
            coordinator.add_ticket(ticket);
        }
        info!("Default tickets loaded");
        changed = true;
    }

    if coordinator.find_user(DEFAULT_ADMIN_ID).is_none() {
        coordinator.register_user(default_admin());
        info!(admin_id = DEFAULT_ADMIN_ID, "Default admin added");
        changed = true;
    }

    changed
}
