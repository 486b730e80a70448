use tracing::{error, info, instrument};
use crate::clients::TicketingClient;
use crate::config::Config;
use crate::persistence::JsonStore;
use crate::seed;
use crate::ticketing::TicketingCoordinator;
use super::{TicketingError, TicketingService};

/// Loads saved state, starts the ticketing service and hands out its client.
pub struct BookingSystem {
    pub client: TicketingClient,
    handle: tokio::task::JoinHandle<()>,
}

impl BookingSystem {
    /// Start the system from the configured data directory.
    ///
    /// **Startup Order:**
    /// 1. Load the saved snapshot (missing files start empty)
    /// 2. Seed default tickets and admin if enabled, saving when that changed anything
    /// 3. Spawn the service that owns the coordinator from then on
    #[instrument(name = "booking_system", skip(config), fields(data_dir = %config.data_dir.display()))]
    pub async fn start(config: &Config) -> Result<Self, TicketingError> {
        info!("Starting booking system");

        let store = JsonStore::new(&config.data_dir);
        let mut coordinator = TicketingCoordinator::from_snapshot(store.load().await?);

        if config.seed_defaults && seed::seed_defaults(&mut coordinator) {
            store.save(&coordinator.snapshot()).await?;
        }

        let (service, client) = TicketingService::new(config.channel_buffer, coordinator, store);
        let handle = tokio::spawn(service.run());

        info!("Booking system started");
        Ok(Self { client, handle })
    }

    /// Stop the service and wait for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down booking system");

        if let Err(e) = self.client.shutdown().await {
            error!(error = %e, "Service already stopped");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("Booking system shutdown complete");
        Ok(())
    }
}
