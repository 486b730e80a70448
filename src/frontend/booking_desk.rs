use tracing::{info, instrument};
use crate::clients::TicketingClient;
use crate::domain::{Booking, PaymentMethod, Ticket, User};
use super::DeskError;

/// Ticket sales counter for fans.
#[derive(Clone)]
pub struct BookingDesk {
    client: TicketingClient,
}

impl BookingDesk {
    pub fn new(client: TicketingClient) -> Self {
        Self { client }
    }

    /// Logs in a fan. Admin ids are refused.
    #[instrument(skip(self))]
    pub async fn login_fan(&self, id: &str) -> Result<User, DeskError> {
        match self.client.find_user(id.trim().to_string()).await? {
            Some(user @ User::Fan(_)) => Ok(user),
            Some(User::Admin(_)) | None => Err(DeskError::FanNotFound),
        }
    }

    pub async fn available_tickets(&self) -> Result<Vec<Ticket>, DeskError> {
        Ok(self.client.list_tickets().await?)
    }

    /// Validates raw form input and books the ticket.
    #[instrument(skip(self))]
    pub async fn book(
        &self,
        fan_id: &str,
        ticket_id: &str,
        quantity: &str,
        payment_method: &str,
    ) -> Result<Booking, DeskError> {
        if ticket_id.trim().is_empty() {
            return Err(DeskError::MissingTicket);
        }
        let quantity = parse_quantity(quantity)?;
        let payment_method = parse_payment_method(payment_method)?;

        let booking = self
            .client
            .book_ticket(fan_id.to_string(), ticket_id.trim().to_string(), quantity, payment_method)
            .await?;
        info!(booking_id = %booking.id, "Booking Confirmed!");
        Ok(booking)
    }
}

pub fn parse_quantity(input: &str) -> Result<u32, DeskError> {
    match input.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(DeskError::InvalidQuantity(input.to_string())),
    }
}

pub fn parse_payment_method(input: &str) -> Result<PaymentMethod, DeskError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DeskError::MissingPaymentMethod);
    }
    input.parse::<PaymentMethod>().map_err(DeskError::UnknownPaymentMethod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::TicketingError;
    use crate::domain::TicketClass;
    use crate::mock_framework::{create_mock_client, expect_book_ticket, expect_find_user};
    use crate::ticketing::BookingError;

    #[test]
    fn test_quantity_must_be_positive_number() {
        assert_eq!(parse_quantity(" 6 "), Ok(6));
        assert_eq!(parse_quantity("two"), Err(DeskError::InvalidQuantity("two".to_string())));
        assert_eq!(parse_quantity("0"), Err(DeskError::InvalidQuantity("0".to_string())));
        assert_eq!(parse_quantity("-3"), Err(DeskError::InvalidQuantity("-3".to_string())));
    }

    #[test]
    fn test_payment_selection() {
        assert_eq!(parse_payment_method(""), Err(DeskError::MissingPaymentMethod));
        assert_eq!(parse_payment_method("Debit Card"), Ok(PaymentMethod::DebitCard));
        assert_eq!(
            parse_payment_method("Cheque"),
            Err(DeskError::UnknownPaymentMethod("Cheque".to_string()))
        );
    }

    #[tokio::test]
    async fn test_bad_input_never_reaches_service() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = BookingDesk::new(client);

        assert_eq!(desk.book("F001", "T001", "abc", "Credit Card").await, Err(DeskError::InvalidQuantity("abc".into())));
        assert_eq!(desk.book("F001", "T001", "2", "").await, Err(DeskError::MissingPaymentMethod));
        assert_eq!(desk.book("F001", "", "2", "Credit Card").await, Err(DeskError::MissingTicket));

        drop(desk);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_book_forwards_parsed_values() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = BookingDesk::new(client);

        let task = tokio::spawn(async move { desk.book("F001", "T001", "6", "Digital Wallet").await });

        let (fan_id, ticket_id, quantity, payment_method, responder) =
            expect_book_ticket(&mut receiver).await.expect("Expected BookTicket");
        assert_eq!((fan_id.as_str(), ticket_id.as_str(), quantity), ("F001", "T001", 6));
        assert_eq!(payment_method, PaymentMethod::DigitalWallet);

        let ticket = Ticket::new("T001", "Single Race", TicketClass::SingleDay, 350.0);
        let booking = Booking::new("B1", "F001", &ticket, quantity, payment_method);
        responder.send(Ok(booking.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(booking));
    }

    #[tokio::test]
    async fn test_invalid_ticket_surfaces_as_message() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = BookingDesk::new(client);

        let task = tokio::spawn(async move { desk.book("F001", "T404", "1", "Credit Card").await });

        let (.., responder) = expect_book_ticket(&mut receiver).await.expect("Expected BookTicket");
        responder
            .send(Err(TicketingError::Booking(BookingError::InvalidTicket("T404".into()))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Invalid Ticket ID: T404");
    }

    #[tokio::test]
    async fn test_admin_cannot_log_in_as_fan() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = BookingDesk::new(client);

        let task = tokio::spawn(async move { desk.login_fan("1234").await });
        let (_, responder) = expect_find_user(&mut receiver).await.expect("Expected FindUser");
        responder.send(Ok(Some(User::admin("1234", "AdminUser", "admin@example.com")))).unwrap();

        assert_eq!(task.await.unwrap(), Err(DeskError::FanNotFound));
    }
}
