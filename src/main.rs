mod domain;
mod collection;
mod user;
mod ticket;
mod ticketing;
mod persistence;
mod seed;
mod config;
mod messages;
mod clients;
mod app_system;
mod frontend;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, BookingSystem};
use crate::config::Config;
use crate::frontend::{AccountDesk, AdminDesk, BookingDesk, DeskError};
use crate::user::UserError;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env();
    setup_tracing(&config.log_filter);

    info!(data_dir = %config.data_dir.display(), "Starting Grand Prix ticketing");

    let system = BookingSystem::start(&config).await.map_err(|e| e.to_string())?;

    let accounts = AccountDesk::new(system.client.clone());
    let counter = BookingDesk::new(system.client.clone());
    let admin_desk = AdminDesk::new(system.client.clone());

    let span = tracing::info_span!("fan_registration");
    async {
        match accounts.register_fan("F001", "Maryam", "maryam@example.com").await {
            Ok(fan) => info!(fan = %fan, "Fan registered"),
            Err(DeskError::User(UserError::AlreadyExists(id))) => {
                info!(fan_id = %id, "Fan already registered, reusing account")
            }
            Err(e) => warn!(error = %e, "Registration failed"),
        }
    }
    .instrument(span)
    .await;

    for ticket in counter.available_tickets().await.map_err(|e| e.to_string())? {
        info!("{}\n{}", ticket, ticket.description());
    }

    let fan = counter.login_fan("F001").await.map_err(|e| e.to_string())?;
    let fan_id = fan.profile().id.clone();

    let span = tracing::info_span!("booking");
    async {
        for (ticket_id, quantity, payment) in [("T001", "2", "Credit Card"), ("T002", "5", "Digital Wallet")] {
            match counter.book(&fan_id, ticket_id, quantity, payment).await {
                Ok(booking) => info!(booking = %booking, "Booking Confirmed!"),
                Err(e) => error!(error = %e, "Booking failed"),
            }
        }
    }
    .instrument(span)
    .await;

    let fan = accounts.login(&fan_id).await.map_err(|e| e.to_string())?;
    info!("Fan Booking History:");
    for line in accounts.dashboard(&fan).await.map_err(|e| e.to_string())? {
        info!("{}", line);
    }

    match admin_desk.login(seed::DEFAULT_ADMIN_ID).await {
        Ok(_) => {
            info!("Admin View - Ticket Sales Summary:");
            for line in admin_desk.sales_summary().await.map_err(|e| e.to_string())? {
                info!("{}", line);
            }
        }
        Err(e) => warn!(error = %e, "Admin login failed"),
    }

    let ledger = system.client.view_all_bookings().await.map_err(|e| e.to_string())?;
    info!(bookings = ledger.len(), "Bookings in ledger");

    drop((accounts, counter, admin_desk));
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
