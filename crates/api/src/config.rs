//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the TeeTime API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `BOOKING_MIN_DURATION_MINUTES`: Shortest bookable session (default: 60)
//! - `BOOKING_MAX_DURATION_MINUTES`: Longest bookable session (default: 360)
//! - `BOOKING_INCREMENT_MINUTES`: Step size after the first hour (default: 30)
//! - `VENUE_OPEN_HOUR`: First bookable hour of the day (default: 6)
//! - `VENUE_CLOSE_HOUR`: Hour at which the last session must end (default: 23)

use std::{env, str::FromStr};

use eyre::{Result, WrapErr};
use teetime_core::models::{duration::DurationConfig, venue::OperatingHours};
use tracing::Level;

/// Configuration for the TeeTime API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use teetime_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Venue default for bookable durations
    pub duration_config: DurationConfig,

    /// Venue default bookable window
    pub operating_hours: OperatingHours,
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A numeric variable cannot be parsed
    /// - The booking durations or operating hours are inconsistent
    ///   (e.g. minimum above maximum, opening after closing)
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("API_PORT", 3000u16)?;

        // Logging settings
        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = parse_var("API_REQUEST_TIMEOUT_SECONDS", 30u64)?;

        // Venue booking rules
        let duration_config = DurationConfig::new(
            parse_var("BOOKING_MIN_DURATION_MINUTES", DurationConfig::DEFAULT_MIN_MINUTES)?,
            parse_var("BOOKING_MAX_DURATION_MINUTES", DurationConfig::DEFAULT_MAX_MINUTES)?,
            parse_var("BOOKING_INCREMENT_MINUTES", DurationConfig::DEFAULT_INCREMENT_MINUTES)?,
        )
        .wrap_err("Invalid booking duration settings")?;

        let operating_hours = OperatingHours::new(
            parse_var("VENUE_OPEN_HOUR", OperatingHours::DEFAULT_START_HOUR)?,
            parse_var("VENUE_CLOSE_HOUR", OperatingHours::DEFAULT_END_HOUR)?,
        )
        .wrap_err("Invalid venue operating hours")?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            duration_config,
            operating_hours,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            duration_config: DurationConfig::default(),
            operating_hours: OperatingHours::default(),
        }
    }
}
