//! Whole-collection JSON snapshots on disk.
//!
//! Each collection lives in its own file under the data directory and is
//! rewritten in full on every save. Writes go to a `.tmp` sibling first and
//! are renamed into place.

pub mod error;

pub use error::*;

use std::path::PathBuf;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use crate::domain::{Booking, Ticket, User};

const USERS_FILE: &str = "users.json";
const TICKETS_FILE: &str = "tickets.json";
const BOOKINGS_FILE: &str = "bookings.json";

/// Full in-memory state of the ticketing system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
    pub bookings: Vec<Booking>,
}

/// JSON file store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads every collection. Missing files load as empty collections.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn load(&self) -> Result<Snapshot, PersistenceError> {
        let snapshot = Snapshot {
            users: self.load_collection(USERS_FILE).await?,
            tickets: self.load_collection(TICKETS_FILE).await?,
            bookings: self.load_collection(BOOKINGS_FILE).await?,
        };
        info!(
            users = snapshot.users.len(),
            tickets = snapshot.tickets.len(),
            bookings = snapshot.bookings.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Rewrites every collection file.
    #[instrument(skip(self, snapshot), fields(dir = %self.dir.display()))]
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PersistenceError::io(&self.dir, e))?;

        self.save_collection(USERS_FILE, &snapshot.users).await?;
        self.save_collection(TICKETS_FILE, &snapshot.tickets).await?;
        self.save_collection(BOOKINGS_FILE, &snapshot.bookings).await?;
        debug!("Snapshot saved");
        Ok(())
    }

    async fn load_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, PersistenceError> {
        let path = self.dir.join(file);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| PersistenceError::serialization(&path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved data, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(PersistenceError::io(&path, e)),
        }
    }

    async fn save_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), PersistenceError> {
        let path = self.dir.join(file);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(items).map_err(|e| PersistenceError::serialization(&path, e))?;

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| PersistenceError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| PersistenceError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaymentMethod, TicketClass};
    use crate::ticketing::TicketingCoordinator;

    fn populated() -> TicketingCoordinator {
        let mut system = TicketingCoordinator::new();
        system.register_user(User::fan("F001", "Maryam", "maryam@example.com"));
        system.register_user(User::admin("1234", "AdminUser", "admin@example.com"));
        system.add_ticket(Ticket::new("T001", "Single Race Pass", TicketClass::SingleDay, 350.0));
        system.book_ticket("F001", "T001", 2, PaymentMethod::CreditCard).unwrap();
        system
    }

    #[tokio::test]
    async fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("fresh"));

        let snapshot = store.load().await.unwrap();

        assert_eq!(snapshot, Snapshot::default());
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_cross_references() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let system = populated();

        store.save(&system.snapshot()).await.unwrap();
        let restored = TicketingCoordinator::from_snapshot(store.load().await.unwrap());

        assert_eq!(restored.snapshot(), system.snapshot());
        let history = restored.booking_history("F001").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ticket_id, "T001");
        assert!(!dir.path().join("users.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TICKETS_FILE), b"not json").unwrap();

        let result = JsonStore::new(dir.path()).load().await;

        assert!(matches!(result, Err(PersistenceError::Serialization { .. })));
    }
}
