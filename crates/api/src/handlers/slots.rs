//! # Slot Handlers
//!
//! Availability checks for a single bay. The caller supplies the day's
//! reservations (customer bookings and admin blocks alike) in the request
//! body; this service fetches nothing itself.
//!
//! ## Available-slot scan
//!
//! `POST /api/slots/available` walks the day's operating window in 30-minute
//! start steps and, for each start, tries every bookable duration that still
//! ends by closing time. A combination is kept if it overlaps none of the
//! reservations. Results are ordered by start time and then by duration, so a
//! "next available" list can be shown shortest-first.

use axum::{extract::State, Json};
use std::sync::Arc;
use teetime_core::{
    models::{
        booking::{
            AvailableSlotResponse, AvailableSlotsRequest, AvailableSlotsResponse,
            CheckSlotRequest, CheckSlotResponse,
        },
        time_slot::{Reservation, ReservationKind, TimeSlot},
    },
    slot_rules,
};

use crate::{
    middleware::error_handling::{AppError, AppJson},
    ApiState,
};

/// Strips every reservation down to its occupied interval.
fn occupied_slots(existing: &[Reservation]) -> Vec<TimeSlot> {
    let admin_blocks = existing
        .iter()
        .filter(|reservation| reservation.kind == ReservationKind::AdminBlock)
        .count();
    tracing::trace!(
        total = existing.len(),
        admin_blocks,
        "Collecting occupied intervals"
    );

    existing.iter().map(|reservation| reservation.slot).collect()
}

/// Checks one candidate slot against the supplied reservations.
///
/// # Errors
///
/// * `TimeError::InvalidSlot` - the candidate ends before it starts
/// * `TimeError::Validation` - a reservation ends before it starts
#[axum::debug_handler]
pub async fn check_slot(
    State(_state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<CheckSlotRequest>,
) -> Result<Json<CheckSlotResponse>, AppError> {
    let candidate = TimeSlot::try_from(payload.candidate)?;
    let existing = occupied_slots(&payload.existing);

    let available = slot_rules::is_slot_available(&candidate, &existing);

    tracing::debug!(
        start = %candidate.start(),
        end = %candidate.end(),
        reservations = existing.len(),
        available,
        "Checked slot availability"
    );

    Ok(Json(CheckSlotResponse {
        available,
        duration_minutes: slot_rules::calculate_duration(candidate.start(), candidate.end()),
        crosses_midnight: slot_rules::crosses_midnight(candidate.start(), candidate.end()),
    }))
}

/// Lists every free start/duration combination for a day.
///
/// # Errors
///
/// * `TimeError::Validation` - a reservation ends before it starts, or the day
///   is too close to the end of the calendar to hold its operating window
/// * `TimeError::InvalidConfig` - the supplied config or operating hours are malformed
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<AvailableSlotsRequest>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let config = state.duration_config_or_default(payload.config)?;
    let hours = state.operating_hours_or_default(payload.operating_hours)?;
    let existing = occupied_slots(&payload.existing);

    let slots = slot_rules::find_available_slots(payload.day, &existing, &config, &hours)?;

    tracing::debug!(
        day = %payload.day,
        reservations = existing.len(),
        free = slots.len(),
        "Enumerated available slots"
    );

    let slots = slots
        .into_iter()
        .map(|slot| AvailableSlotResponse {
            start: slot.start(),
            end: slot.end(),
            // Options never exceed the config maximum, which is a u32
            duration_minutes: slot_rules::calculate_duration(slot.start(), slot.end()) as u32,
        })
        .collect();

    Ok(Json(AvailableSlotsResponse {
        day: payload.day,
        slots,
    }))
}
