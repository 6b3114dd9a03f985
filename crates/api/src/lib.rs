//! # TeeTime API
//!
//! The API crate exposes the bay-booking rules from `teetime-core` as a set of
//! stateless JSON endpoints. Calendar and pricing front-ends post the data they
//! already hold (a requested duration, a day's reservations) and receive the
//! rule's answer. Nothing is stored between requests.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate request bodies into core values and call the rules
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment configuration, including the venue's booking defaults

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the booking rules
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use teetime_core::{
    errors::TimeResult,
    models::{
        duration::{DurationConfig, DurationConfigRequest},
        venue::{OperatingHours, OperatingHoursRequest},
    },
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds the venue's default booking rules, used whenever a request does not
/// carry its own config or operating hours.
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    pub duration_config: DurationConfig,
    pub operating_hours: OperatingHours,
}

impl ApiState {
    pub fn new(duration_config: DurationConfig, operating_hours: OperatingHours) -> Self {
        Self {
            duration_config,
            operating_hours,
        }
    }

    /// The request's own duration config if it sent one, otherwise the venue default.
    pub fn duration_config_or_default(
        &self,
        requested: Option<DurationConfigRequest>,
    ) -> TimeResult<DurationConfig> {
        match requested {
            Some(raw) => DurationConfig::try_from(raw),
            None => Ok(self.duration_config),
        }
    }

    pub fn operating_hours_or_default(
        &self,
        requested: Option<OperatingHoursRequest>,
    ) -> TimeResult<OperatingHours> {
        match requested {
            Some(raw) => OperatingHours::try_from(raw),
            None => Ok(self.operating_hours),
        }
    }
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Duration rules
        .merge(routes::durations::routes())
        // Slot availability
        .merge(routes::slots::routes())
        // Price quotes
        .merge(routes::pricing::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// This function sets up logging, configures routes and middleware, and
/// serves HTTP until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and venue defaults
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(config.duration_config, config.operating_hours));
    info!(
        min = config.duration_config.min_duration_minutes(),
        max = config.duration_config.max_duration_minutes(),
        increment = config.duration_config.increment_after_first_hour_minutes(),
        opens = config.operating_hours.start_hour(),
        closes = config.operating_hours.end_hour(),
        "Loaded venue booking rules"
    );

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout
    let app = app
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(
            tower::ServiceBuilder::new()
                .layer(axum::error_handling::HandleErrorLayer::new(
                    middleware::error_handling::handle_timeout,
                ))
                .timeout(std::time::Duration::from_secs(config.request_timeout))
                .into_inner(),
        );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
