//! Runtime configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first when present.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `users.json`, `tickets.json` and `bookings.json`
    pub data_dir: PathBuf,
    /// Capacity of the service request channel
    pub channel_buffer: usize,
    /// Write the default tickets and admin on first run
    pub seed_defaults: bool,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            channel_buffer: 32,
            seed_defaults: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup("GRANDPRIX_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            channel_buffer: lookup("GRANDPRIX_CHANNEL_BUFFER")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.channel_buffer),
            seed_defaults: lookup("GRANDPRIX_SEED_DEFAULTS")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.seed_defaults),
            log_filter: lookup("GRANDPRIX_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
