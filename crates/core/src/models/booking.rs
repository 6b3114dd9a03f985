use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{
    duration::{DurationConfigRequest, Minutes, ValidationResult},
    pricing::{CustomerTier, PriceBreakdown},
    time_slot::{Reservation, TimeSlotRequest},
    venue::OperatingHoursRequest,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationOptionsRequest {
    pub config: Option<DurationConfigRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationOptionsResponse {
    pub options: Vec<Minutes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateDurationRequest {
    pub duration_minutes: Minutes,
    pub config: Option<DurationConfigRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateDurationResponse {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundDurationRequest {
    pub duration_minutes: Minutes,
    #[serde(default)]
    pub round_up: bool,
    pub config: Option<DurationConfigRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundDurationResponse {
    pub duration_minutes: Minutes,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsellRequest {
    pub current_duration_minutes: Minutes,
    pub config: Option<DurationConfigRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsellResponse {
    pub upsell_duration_minutes: Option<Minutes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSlotRequest {
    pub candidate: TimeSlotRequest,
    #[serde(default)]
    pub existing: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSlotResponse {
    pub available: bool,
    pub duration_minutes: i64,
    pub crosses_midnight: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsRequest {
    pub day: NaiveDate,
    #[serde(default)]
    pub existing: Vec<Reservation>,
    pub config: Option<DurationConfigRequest>,
    pub operating_hours: Option<OperatingHoursRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotResponse {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: Minutes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub day: NaiveDate,
    pub slots: Vec<AvailableSlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteRequest {
    pub duration_minutes: Minutes,
    pub hourly_rate: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub tier: CustomerTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteResponse {
    #[serde(flatten)]
    pub price: PriceBreakdown,
    pub duration_minutes: Minutes,
    pub formatted_duration: String,
    pub tier: CustomerTier,
}
