use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::TicketingClient;
use crate::domain::{Booking, PaymentMethod, Ticket, User, UserPatch};
use crate::messages::TicketingRequest;
use crate::persistence::JsonStore;
use crate::ticketing::TicketingCoordinator;
use super::TicketingError;

/// Actor owning the coordinator and its store.
///
/// Requests are handled one at a time. Every mutating request is followed by
/// a full save; if the save fails the caller gets
/// [`TicketingError::Persistence`] while the in-memory change stays.
pub struct TicketingService {
    receiver: mpsc::Receiver<TicketingRequest>,
    coordinator: TicketingCoordinator,
    store: JsonStore,
}

impl TicketingService {
    pub fn new(
        buffer_size: usize,
        coordinator: TicketingCoordinator,
        store: JsonStore,
    ) -> (Self, TicketingClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            coordinator,
            store,
        };
        (service, TicketingClient::new(sender))
    }

    #[instrument(name = "ticketing_service", skip(self))]
    pub async fn run(mut self) {
        info!("TicketingService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TicketingRequest::RegisterUser { user, respond_to } => {
                    let _ = respond_to.send(self.handle_register_user(user).await);
                }
                TicketingRequest::FindUser { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_find_user(id)));
                }
                TicketingRequest::UpdateUser { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update_user(id, patch).await);
                }
                TicketingRequest::DeleteUser { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete_user(id).await);
                }
                TicketingRequest::AddTicket { ticket, respond_to } => {
                    let _ = respond_to.send(self.handle_add_ticket(ticket).await);
                }
                TicketingRequest::ListTickets { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.tickets().to_vec()));
                }
                TicketingRequest::SetTicketPrice { id, price, respond_to } => {
                    let _ = respond_to.send(self.handle_set_ticket_price(id, price).await);
                }
                TicketingRequest::BookTicket {
                    fan_id,
                    ticket_id,
                    quantity,
                    payment_method,
                    respond_to,
                } => {
                    let result = self
                        .handle_book_ticket(fan_id, ticket_id, quantity, payment_method)
                        .await;
                    let _ = respond_to.send(result);
                }
                TicketingRequest::BookingHistory { fan_id, respond_to } => {
                    let result = self.coordinator.booking_history(&fan_id).map_err(Into::into);
                    let _ = respond_to.send(result);
                }
                TicketingRequest::ViewAllBookings { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.view_all_bookings().to_vec()));
                }
                TicketingRequest::ViewTicketSales { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.view_ticket_sales()));
                }
                TicketingRequest::Shutdown => {
                    info!("TicketingService shutting down");
                    break;
                }
            }
        }

        info!("TicketingService stopped");
    }

    #[instrument(fields(user_id = %user.profile().id, admin = user.is_admin()), skip(self, user))]
    async fn handle_register_user(&mut self, user: User) -> Result<(), TicketingError> {
        debug!("Processing register_user request");
        self.coordinator.register_user(user);
        self.persist().await?;
        info!("User registered");
        Ok(())
    }

    #[instrument(fields(user_id = %id), skip(self, id))]
    fn handle_find_user(&self, id: String) -> Option<User> {
        let user = self.coordinator.find_user(&id).cloned();
        match &user {
            Some(user) => debug!(user_name = %user.name(), "User found"),
            None => debug!("User not found"),
        }
        user
    }

    #[instrument(fields(user_id = %id), skip(self, id, patch))]
    async fn handle_update_user(&mut self, id: String, patch: UserPatch) -> Result<User, TicketingError> {
        let user = self.coordinator.update_user(&id, patch)?;
        self.persist().await?;
        info!("User updated");
        Ok(user)
    }

    #[instrument(fields(user_id = %id), skip(self, id))]
    async fn handle_delete_user(&mut self, id: String) -> Result<User, TicketingError> {
        let user = self.coordinator.remove_user(&id)?;
        self.persist().await?;
        info!("User deleted, bookings kept in ledger");
        Ok(user)
    }

    #[instrument(fields(ticket_id = %ticket.id), skip(self, ticket))]
    async fn handle_add_ticket(&mut self, ticket: Ticket) -> Result<(), TicketingError> {
        self.coordinator.add_ticket(ticket);
        self.persist().await?;
        info!("Ticket added");
        Ok(())
    }

    #[instrument(fields(ticket_id = %id), skip(self, id))]
    async fn handle_set_ticket_price(&mut self, id: String, price: f64) -> Result<Ticket, TicketingError> {
        let ticket = self.coordinator.set_ticket_price(&id, price)?;
        self.persist().await?;
        info!("Ticket price changed");
        Ok(ticket)
    }

    #[instrument(
        fields(fan_id = %fan_id, ticket_id = %ticket_id, payment = %payment_method),
        skip(self, fan_id, ticket_id, payment_method)
    )]
    async fn handle_book_ticket(
        &mut self,
        fan_id: String,
        ticket_id: String,
        quantity: u32,
        payment_method: PaymentMethod,
    ) -> Result<Booking, TicketingError> {
        debug!("Processing book_ticket request");

        let booking = match self.coordinator.book_ticket(&fan_id, &ticket_id, quantity, payment_method) {
            Ok(booking) => booking,
            Err(e) => {
                warn!(error = %e, "Booking rejected");
                return Err(e.into());
            }
        };

        self.persist().await?;
        info!(booking_id = %booking.id, total = booking.total_price, "Booking confirmed");
        Ok(booking)
    }

    async fn persist(&self) -> Result<(), TicketingError> {
        self.store.save(&self.coordinator.snapshot()).await.map_err(|e| {
            error!(error = %e, "Save failed, in-memory state kept");
            TicketingError::Persistence(e)
        })
    }
}
