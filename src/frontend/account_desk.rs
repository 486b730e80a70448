use tracing::{info, instrument, warn};
use crate::clients::TicketingClient;
use crate::domain::{User, UserPatch};
use crate::user::UserError;
use super::DeskError;

/// Account management: sign-up, login, dashboard and deletion.
#[derive(Clone)]
pub struct AccountDesk {
    client: TicketingClient,
}

impl AccountDesk {
    pub fn new(client: TicketingClient) -> Self {
        Self { client }
    }

    /// Registers a new fan after checking the id is free.
    #[instrument(skip(self, name, email))]
    pub async fn register_fan(&self, id: &str, name: &str, email: &str) -> Result<User, DeskError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(UserError::ValidationError("User ID required".to_string()).into());
        }
        if self.client.find_user(id.to_string()).await?.is_some() {
            warn!("User ID already taken");
            return Err(UserError::AlreadyExists(id.to_string()).into());
        }

        let fan = User::fan(id, name, email);
        self.client.register_user(fan.clone()).await?;
        info!("Fan account created");
        Ok(fan)
    }

    #[instrument(skip(self))]
    pub async fn login(&self, id: &str) -> Result<User, DeskError> {
        self.client
            .find_user(id.trim().to_string())
            .await?
            .ok_or(DeskError::UserNotFound)
    }

    /// Text lines of the account dashboard for `user`.
    pub async fn dashboard(&self, user: &User) -> Result<Vec<String>, DeskError> {
        let mut lines = vec![format!("Welcome {}", user.name()), user.account_details()];

        match user {
            User::Fan(fan) => {
                let bookings = self.client.booking_history(fan.profile.id.clone()).await?;
                if bookings.is_empty() {
                    lines.push("No tickets booked yet.".to_string());
                } else {
                    lines.push("Your Booked Tickets:".to_string());
                    lines.extend(bookings.iter().map(ToString::to_string));
                }
            }
            User::Admin(_) => {}
        }

        Ok(lines)
    }

    #[allow(dead_code)]
    pub async fn update_profile(&self, id: &str, patch: UserPatch) -> Result<User, DeskError> {
        Ok(self.client.update_user(id.to_string(), patch).await?)
    }

    /// Deletes the account. Past bookings remain in the ledger.
    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn delete_account(&self, id: &str) -> Result<(), DeskError> {
        self.client.delete_user(id.to_string()).await?;
        info!("Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_find_user, expect_register_user};

    #[tokio::test]
    async fn test_register_rejects_taken_id() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = AccountDesk::new(client);

        let task = tokio::spawn(async move { desk.register_fan("F001", "Other", "o@example.com").await });

        let (id, responder) = expect_find_user(&mut receiver).await.expect("Expected FindUser");
        assert_eq!(id, "F001");
        responder.send(Ok(Some(User::fan("F001", "Maryam", "maryam@example.com")))).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(DeskError::User(UserError::AlreadyExists("F001".to_string()))));
        // Nothing else was sent; the desk dropped its client.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_register_new_fan() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = AccountDesk::new(client);

        let task = tokio::spawn(async move { desk.register_fan(" F002 ", "Omar", "omar@example.com").await });

        let (id, responder) = expect_find_user(&mut receiver).await.expect("Expected FindUser");
        assert_eq!(id, "F002");
        responder.send(Ok(None)).unwrap();

        let (user, responder) = expect_register_user(&mut receiver).await.expect("Expected RegisterUser");
        assert_eq!(user, User::fan("F002", "Omar", "omar@example.com"));
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_empty_id_never_reaches_service() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = AccountDesk::new(client);

        let result = desk.register_fan("  ", "Nobody", "n@example.com").await;
        drop(desk);

        assert!(matches!(result, Err(DeskError::User(UserError::ValidationError(_)))));
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (client, mut receiver) = create_mock_client(10);
        let desk = AccountDesk::new(client);

        let task = tokio::spawn(async move { desk.login("ghost").await });
        let (_, responder) = expect_find_user(&mut receiver).await.expect("Expected FindUser");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Err(DeskError::UserNotFound));
    }
}
