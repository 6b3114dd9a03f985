//! # Duration Handlers
//!
//! Endpoints backing the duration picker and drag-to-select on the calendar
//! grids: the list of bookable lengths, validation of a dragged range,
//! snapping it to a bookable length, and the "extend your session" offer.
//!
//! Every request may carry its own `config`; otherwise the venue defaults
//! from [`ApiState`] apply.

use axum::{extract::State, Json};
use std::sync::Arc;
use teetime_core::{
    models::booking::{
        DurationOptionsRequest, DurationOptionsResponse, RoundDurationRequest,
        RoundDurationResponse, UpsellRequest, UpsellResponse, ValidateDurationRequest,
        ValidateDurationResponse,
    },
    slot_rules,
};

use crate::{
    middleware::error_handling::{AppError, AppJson},
    ApiState,
};

/// Lists bookable durations under the venue defaults.
///
/// ```text
/// GET /api/durations/options
/// ```
#[axum::debug_handler]
pub async fn default_duration_options(
    State(state): State<Arc<ApiState>>,
) -> Json<DurationOptionsResponse> {
    let options = slot_rules::generate_duration_options(&state.duration_config);
    Json(DurationOptionsResponse { options })
}

/// Lists bookable durations under the config in the body.
///
/// ```text
/// POST /api/durations/options
/// ```
#[axum::debug_handler]
pub async fn duration_options(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<DurationOptionsRequest>,
) -> Result<Json<DurationOptionsResponse>, AppError> {
    let config = state.duration_config_or_default(payload.config)?;
    let options = slot_rules::generate_duration_options(&config);

    tracing::debug!(count = options.len(), "Generated duration options");

    Ok(Json(DurationOptionsResponse { options }))
}

/// Checks whether a duration can be booked.
///
/// A rejected duration is still a `200`; the body carries `valid: false`
/// and the reason to show the customer.
#[axum::debug_handler]
pub async fn validate_duration(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<ValidateDurationRequest>,
) -> Result<Json<ValidateDurationResponse>, AppError> {
    let config = state.duration_config_or_default(payload.config)?;
    let result = slot_rules::is_valid_duration(payload.duration_minutes, &config);

    tracing::debug!(
        duration = payload.duration_minutes,
        valid = result.valid,
        "Validated duration"
    );

    Ok(Json(ValidateDurationResponse {
        result,
        formatted: slot_rules::format_duration(payload.duration_minutes),
    }))
}

#[axum::debug_handler]
pub async fn round_duration(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<RoundDurationRequest>,
) -> Result<Json<RoundDurationResponse>, AppError> {
    let config = state.duration_config_or_default(payload.config)?;
    let rounded =
        slot_rules::round_to_valid_duration(payload.duration_minutes, &config, payload.round_up);

    tracing::debug!(
        requested = payload.duration_minutes,
        round_up = payload.round_up,
        rounded,
        "Rounded duration"
    );

    Ok(Json(RoundDurationResponse {
        duration_minutes: rounded,
        formatted: slot_rules::format_duration(rounded),
    }))
}

#[axum::debug_handler]
pub async fn upsell_duration(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<UpsellRequest>,
) -> Result<Json<UpsellResponse>, AppError> {
    let config = state.duration_config_or_default(payload.config)?;
    let upsell = slot_rules::get_upsell_duration(payload.current_duration_minutes, &config);

    Ok(Json(UpsellResponse {
        upsell_duration_minutes: upsell,
    }))
}
