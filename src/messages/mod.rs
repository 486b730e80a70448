use tokio::sync::oneshot;
use crate::app_system::TicketingError;
use crate::domain::{Booking, PaymentMethod, Ticket, User, UserPatch};
use crate::ticketing::SalesReport;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the ticketing service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum TicketingRequest {
    RegisterUser {
        user: User,
        respond_to: ServiceResponse<(), TicketingError>,
    },
    FindUser {
        id: String,
        respond_to: ServiceResponse<Option<User>, TicketingError>,
    },
    UpdateUser {
        id: String,
        patch: UserPatch,
        respond_to: ServiceResponse<User, TicketingError>,
    },
    DeleteUser {
        id: String,
        respond_to: ServiceResponse<User, TicketingError>,
    },
    AddTicket {
        ticket: Ticket,
        respond_to: ServiceResponse<(), TicketingError>,
    },
    ListTickets {
        respond_to: ServiceResponse<Vec<Ticket>, TicketingError>,
    },
    SetTicketPrice {
        id: String,
        price: f64,
        respond_to: ServiceResponse<Ticket, TicketingError>,
    },
    BookTicket {
        fan_id: String,
        ticket_id: String,
        quantity: u32,
        payment_method: PaymentMethod,
        respond_to: ServiceResponse<Booking, TicketingError>,
    },
    BookingHistory {
        fan_id: String,
        respond_to: ServiceResponse<Vec<Booking>, TicketingError>,
    },
    ViewAllBookings {
        respond_to: ServiceResponse<Vec<Booking>, TicketingError>,
    },
    ViewTicketSales {
        respond_to: ServiceResponse<SalesReport, TicketingError>,
    },
    Shutdown,
}
