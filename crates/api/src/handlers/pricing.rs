use axum::{extract::State, Json};
use std::sync::Arc;
use teetime_core::{
    errors::TimeError,
    models::booking::{PriceQuoteRequest, PriceQuoteResponse},
    slot_rules,
};

use crate::{
    middleware::error_handling::{AppError, AppJson},
    ApiState,
};

/// Prices a session of the requested length.
///
/// The duration is not checked against the booking rules here; the picker
/// only offers valid options.
#[axum::debug_handler]
pub async fn quote_price(
    State(_state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<PriceQuoteRequest>,
) -> Result<Json<PriceQuoteResponse>, AppError> {
    if !payload.hourly_rate.is_finite() || payload.hourly_rate < 0.0 {
        return Err(AppError(TimeError::Validation(
            "Hourly rate must be a non-negative number".to_string(),
        )));
    }
    if !(0.0..=100.0).contains(&payload.discount_percent) {
        return Err(AppError(TimeError::Validation(
            "Discount must be between 0 and 100 percent".to_string(),
        )));
    }

    let price = slot_rules::calculate_price(
        payload.duration_minutes,
        payload.hourly_rate,
        payload.discount_percent,
    );

    tracing::debug!(
        duration = payload.duration_minutes,
        tier = ?payload.tier,
        final_price = price.final_price,
        "Quoted price"
    );

    Ok(Json(PriceQuoteResponse {
        price,
        duration_minutes: payload.duration_minutes,
        formatted_duration: slot_rules::format_duration(payload.duration_minutes),
        tier: payload.tier,
    }))
}
