use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use kiosk_config::constants;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database_path: Option<PathBuf>,
    pub csv_path: PathBuf,
    pub astros_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var(constants::PORT).unwrap_or_else(|_| "4001".to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin = env::var(constants::CORS_ORIGIN)
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        let database_path = env::var(constants::KIOSK_DB_PATH).ok().map(PathBuf::from);

        let csv_path = env::var(constants::KIOSK_CSV_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_CSV_PATH));

        let astros_url = env::var(constants::KIOSK_ASTROS_URL)
            .unwrap_or_else(|_| constants::DEFAULT_ASTROS_URL.to_string());

        let timeout_secs = env::var(constants::KIOSK_UPSTREAM_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(constants::DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Config {
            port,
            cors_origin,
            database_path,
            csv_path,
            astros_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
