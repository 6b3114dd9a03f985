use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/durations/options",
            get(handlers::durations::default_duration_options)
                .post(handlers::durations::duration_options),
        )
        .route(
            "/api/durations/validate",
            post(handlers::durations::validate_duration),
        )
        .route(
            "/api/durations/round",
            post(handlers::durations::round_duration),
        )
        .route(
            "/api/durations/upsell",
            post(handlers::durations::upsell_duration),
        )
}
