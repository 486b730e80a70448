use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::app_system::TicketingError;
use crate::domain::{Booking, PaymentMethod, Ticket, User, UserPatch};
use crate::messages::TicketingRequest;
use crate::ticketing::SalesReport;

/// Cloneable handle to the ticketing service.
#[derive(Clone, Debug)]
pub struct TicketingClient {
    sender: mpsc::Sender<TicketingRequest>,
}

impl TicketingClient {
    pub fn new(sender: mpsc::Sender<TicketingRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), TicketingError> {
        debug!("Sending shutdown");
        self.sender
            .send(TicketingRequest::Shutdown)
            .await
            .map_err(|_| TicketingError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(TicketingClient => fn register_user(user: User) -> () as TicketingRequest::RegisterUser);
client_method!(TicketingClient => fn find_user(id: String) -> Option<User> as TicketingRequest::FindUser);
client_method!(TicketingClient => fn update_user(id: String, patch: UserPatch) -> User as TicketingRequest::UpdateUser);
client_method!(TicketingClient => fn delete_user(id: String) -> User as TicketingRequest::DeleteUser);
client_method!(TicketingClient => fn add_ticket(ticket: Ticket) -> () as TicketingRequest::AddTicket);
client_method!(TicketingClient => fn list_tickets() -> Vec<Ticket> as TicketingRequest::ListTickets);
client_method!(TicketingClient => fn set_ticket_price(id: String, price: f64) -> Ticket as TicketingRequest::SetTicketPrice);
client_method!(TicketingClient => fn book_ticket(fan_id: String, ticket_id: String, quantity: u32, payment_method: PaymentMethod) -> Booking as TicketingRequest::BookTicket);
client_method!(TicketingClient => fn booking_history(fan_id: String) -> Vec<Booking> as TicketingRequest::BookingHistory);
client_method!(TicketingClient => fn view_all_bookings() -> Vec<Booking> as TicketingRequest::ViewAllBookings);
client_method!(TicketingClient => fn view_ticket_sales() -> SalesReport as TicketingRequest::ViewTicketSales);
