//! # Mock Framework
//!
//! Utilities for testing desks and other client users in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then use helpers like [`expect_find_user`] or
//! [`expect_book_ticket`] to assert what was sent and script the reply.

use tokio::sync::mpsc;
use crate::app_system::TicketingError;
use crate::clients::TicketingClient;
use crate::domain::{Booking, PaymentMethod, User};
use crate::messages::{ServiceResponse, TicketingRequest};
use crate::ticketing::SalesReport;

/// Creates a client whose requests land on the returned receiver instead of
/// a running service.
pub fn create_mock_client(buffer_size: usize) -> (TicketingClient, mpsc::Receiver<TicketingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TicketingClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FindUser request
pub async fn expect_find_user(
    receiver: &mut mpsc::Receiver<TicketingRequest>,
) -> Option<(String, ServiceResponse<Option<User>, TicketingError>)> {
    match receiver.recv().await {
        Some(TicketingRequest::FindUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RegisterUser request
pub async fn expect_register_user(
    receiver: &mut mpsc::Receiver<TicketingRequest>,
) -> Option<(User, ServiceResponse<(), TicketingError>)> {
    match receiver.recv().await {
        Some(TicketingRequest::RegisterUser { user, respond_to }) => Some((user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a BookTicket request
#[allow(clippy::type_complexity)]
pub async fn expect_book_ticket(
    receiver: &mut mpsc::Receiver<TicketingRequest>,
) -> Option<(String, String, u32, PaymentMethod, ServiceResponse<Booking, TicketingError>)> {
    match receiver.recv().await {
        Some(TicketingRequest::BookTicket {
            fan_id,
            ticket_id,
            quantity,
            payment_method,
            respond_to,
        }) => Some((fan_id, ticket_id, quantity, payment_method, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ViewTicketSales request
pub async fn expect_ticket_sales(
    receiver: &mut mpsc::Receiver<TicketingRequest>,
) -> Option<ServiceResponse<SalesReport, TicketingError>> {
    match receiver.recv().await {
        Some(TicketingRequest::ViewTicketSales { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let find_task = tokio::spawn(async move { client.find_user("F001".to_string()).await });

        let (id, responder) = expect_find_user(&mut receiver).await.expect("Expected FindUser request");
        assert_eq!(id, "F001");
        let fan = User::fan("F001", "Maryam", "maryam@example.com");
        responder.send(Ok(Some(fan.clone()))).unwrap();

        let result = find_task.await.unwrap();
        assert_eq!(result, Ok(Some(fan)));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.list_tickets().await });
        drop(receiver.recv().await);

        assert_eq!(
            task.await.unwrap(),
            Err(TicketingError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
