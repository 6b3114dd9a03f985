use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/check", post(handlers::slots::check_slot))
        .route(
            "/api/slots/available",
            post(handlers::slots::available_slots),
        )
}
