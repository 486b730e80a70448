use tracing::instrument;
use crate::clients::TicketingClient;
use crate::domain::{Ticket, User};
use super::DeskError;

/// Read-only sales dashboard for admins.
#[derive(Clone)]
pub struct AdminDesk {
    client: TicketingClient,
}

impl AdminDesk {
    pub fn new(client: TicketingClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn login(&self, id: &str) -> Result<User, DeskError> {
        match self.client.find_user(id.trim().to_string()).await? {
            Some(user @ User::Admin(_)) => Ok(user),
            Some(User::Fan(_)) | None => Err(DeskError::AdminNotFound),
        }
    }

    /// One `"<ticket type>: <n> tickets sold"` line per ticket type.
    pub async fn sales_summary(&self) -> Result<Vec<String>, DeskError> {
        let sales = self.client.view_ticket_sales().await?;
        Ok(sales
            .iter()
            .map(|(ticket_type, count)| format!("{}: {} tickets sold", ticket_type, count))
            .collect())
    }

    /// Adds a catalog entry. Callers keep ticket ids unique.
    #[allow(dead_code)]
    #[instrument(skip(self, ticket), fields(ticket_id = %ticket.id))]
    pub async fn add_ticket(&self, ticket: Ticket) -> Result<(), DeskError> {
        Ok(self.client.add_ticket(ticket).await?)
    }

    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn set_ticket_price(&self, ticket_id: &str, price: &str) -> Result<Ticket, DeskError> {
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|_| DeskError::InvalidPrice(price.to_string()))?;
        Ok(self.client.set_ticket_price(ticket_id.to_string(), price).await?)
    }
}
