use std::collections::BTreeMap;
use tracing::debug;
use crate::collection::Collection;
use crate::domain::{Booking, PaymentMethod, Ticket, TicketPatch, User, UserPatch};
use crate::persistence::Snapshot;
use crate::ticket::CatalogError;
use crate::user::UserError;
use super::BookingError;

pub type UserRegistry = Collection<User>;
pub type TicketCatalog = Collection<Ticket>;

/// Total quantity sold per ticket type label.
pub type SalesReport = BTreeMap<String, u64>;

/// Owns the registry, the catalog and the booking ledger.
///
/// All state changes go through the methods below. Persisting the result is
/// the caller's job.
#[derive(Debug, Clone, Default)]
pub struct TicketingCoordinator {
    users: UserRegistry,
    tickets: TicketCatalog,
    bookings: Vec<Booking>,
}

impl TicketingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            users: Collection::from_items(snapshot.users),
            tickets: Collection::from_items(snapshot.tickets),
            bookings: snapshot.bookings,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.as_slice().to_vec(),
            tickets: self.tickets.as_slice().to_vec(),
            bookings: self.bookings.clone(),
        }
    }

    // --- Registry ---

    /// Appends the user. Callers check for an existing id first.
    pub fn register_user(&mut self, user: User) {
        debug!(user_id = %user.profile().id, "Registering user");
        self.users.push(user);
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.find_by_id(id)
    }

    #[allow(dead_code)]
    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User, UserError> {
        if !self.users.contains(id) {
            return Err(UserError::NotFound(id.to_string()));
        }
        self.users.update(id, patch).map_err(UserError::ValidationError)
    }

    /// Removes the user. Their bookings stay in the ledger.
    pub fn remove_user(&mut self, id: &str) -> Result<User, UserError> {
        self.users
            .remove(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    // --- Catalog ---

    pub fn add_ticket(&mut self, ticket: Ticket) {
        debug!(ticket_id = %ticket.id, "Adding ticket");
        self.tickets.push(ticket);
    }

    pub fn find_ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.find_by_id(id)
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.tickets.as_slice()
    }

    pub fn set_ticket_price(&mut self, id: &str, price: f64) -> Result<Ticket, CatalogError> {
        if !self.tickets.contains(id) {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        self.tickets
            .update(id, TicketPatch { price: Some(price) })
            .map_err(CatalogError::ValidationError)
    }

    // --- Bookings ---

    /// Books `quantity` tickets of `ticket_id` for the fan.
    ///
    /// Only the ticket and the fan are checked. On error nothing changes.
    pub fn book_ticket(
        &mut self,
        fan_id: &str,
        ticket_id: &str,
        quantity: u32,
        payment_method: PaymentMethod,
    ) -> Result<Booking, BookingError> {
        let ticket = self
            .tickets
            .find_by_id(ticket_id)
            .ok_or_else(|| BookingError::InvalidTicket(ticket_id.to_string()))?;

        let fan = self
            .users
            .find_by_id_mut(fan_id)
            .and_then(User::as_fan_mut)
            .ok_or_else(|| BookingError::NotAFan(fan_id.to_string()))?;

        let booking_id = format!("B{}", self.bookings.len() + 1);
        let booking = Booking::new(booking_id, fan_id, ticket, quantity, payment_method);

        self.bookings.push(booking.clone());
        fan.record_booking(booking.id.clone());

        debug!(booking_id = %booking.id, total = booking.total_price, "Booking recorded");
        Ok(booking)
    }

    pub fn view_all_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The fan's bookings in the order they were made.
    pub fn booking_history(&self, fan_id: &str) -> Result<Vec<Booking>, BookingError> {
        let fan = self
            .users
            .find_by_id(fan_id)
            .and_then(User::as_fan)
            .ok_or_else(|| BookingError::NotAFan(fan_id.to_string()))?;

        Ok(fan
            .booking_history()
            .iter()
            .filter_map(|id| self.bookings.iter().find(|booking| &booking.id == id))
            .cloned()
            .collect())
    }

    /// Sums booked quantities per ticket type label across the whole ledger.
    pub fn view_ticket_sales(&self) -> SalesReport {
        let mut sales = SalesReport::new();
        for booking in &self.bookings {
            *sales.entry(booking.ticket_type.clone()).or_insert(0) += u64::from(booking.quantity);
        }
        sales
    }
}
