use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{TimeError, TimeResult};
use crate::slot_rules::format_duration;

/// Whole minutes. Every duration option is one of these.
pub type Minutes = u32;

/// Bounds and step size for bookable durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DurationConfigRequest")]
pub struct DurationConfig {
    min_duration_minutes: Minutes,
    max_duration_minutes: Minutes,
    increment_after_first_hour_minutes: Minutes,
}

impl DurationConfig {
    pub const DEFAULT_MIN_MINUTES: Minutes = 60;
    pub const DEFAULT_MAX_MINUTES: Minutes = 360;
    pub const DEFAULT_INCREMENT_MINUTES: Minutes = 30;

    pub fn new(min: Minutes, max: Minutes, increment: Minutes) -> TimeResult<Self> {
        if min == 0 {
            return Err(TimeError::InvalidConfig(
                "minimum duration must be positive".to_string(),
            ));
        }
        if min > max {
            return Err(TimeError::InvalidConfig(format!(
                "minimum duration {min} exceeds maximum duration {max}"
            )));
        }
        if increment == 0 {
            return Err(TimeError::InvalidConfig(
                "increment after the first hour must be positive".to_string(),
            ));
        }
        Ok(Self {
            min_duration_minutes: min,
            max_duration_minutes: max,
            increment_after_first_hour_minutes: increment,
        })
    }

    pub fn min_duration_minutes(&self) -> Minutes {
        self.min_duration_minutes
    }

    pub fn max_duration_minutes(&self) -> Minutes {
        self.max_duration_minutes
    }

    pub fn increment_after_first_hour_minutes(&self) -> Minutes {
        self.increment_after_first_hour_minutes
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            min_duration_minutes: Self::DEFAULT_MIN_MINUTES,
            max_duration_minutes: Self::DEFAULT_MAX_MINUTES,
            increment_after_first_hour_minutes: Self::DEFAULT_INCREMENT_MINUTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationConfigRequest {
    pub min_duration_minutes: Minutes,
    pub max_duration_minutes: Minutes,
    pub increment_after_first_hour_minutes: Minutes,
}

impl TryFrom<DurationConfigRequest> for DurationConfig {
    type Error = TimeError;

    fn try_from(value: DurationConfigRequest) -> TimeResult<Self> {
        DurationConfig::new(
            value.min_duration_minutes,
            value.max_duration_minutes,
            value.increment_after_first_hour_minutes,
        )
    }
}

impl From<DurationConfig> for DurationConfigRequest {
    fn from(config: DurationConfig) -> Self {
        Self {
            min_duration_minutes: config.min_duration_minutes,
            max_duration_minutes: config.max_duration_minutes,
            increment_after_first_hour_minutes: config.increment_after_first_hour_minutes,
        }
    }
}

fn spelled_out(minutes: &Minutes) -> String {
    format_duration(*minutes)
}

/// Why a requested duration cannot be booked. The display text is shown to
/// customers as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationViolation {
    #[error("Minimum booking duration is {}", spelled_out(.minimum))]
    BelowMinimum { minimum: Minutes },

    #[error("Maximum booking duration is {}", spelled_out(.maximum))]
    AboveMaximum { maximum: Minutes },

    #[error("After the first hour, bookings must be in {increment}-minute increments")]
    MisalignedIncrement { increment: Minutes },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }
}

impl From<Result<(), DurationViolation>> for ValidationResult {
    fn from(result: Result<(), DurationViolation>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(violation) => Self {
                valid: false,
                error: Some(violation.to_string()),
            },
        }
    }
}
