use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{TimeError, TimeResult};

/// The bookable window of a calendar day, in whole local hours.
///
/// `end_hour` may be 24 for a venue that closes at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OperatingHoursRequest")]
pub struct OperatingHours {
    start_hour: u32,
    end_hour: u32,
}

impl OperatingHours {
    pub const DEFAULT_START_HOUR: u32 = 6;
    pub const DEFAULT_END_HOUR: u32 = 23;

    pub fn new(start_hour: u32, end_hour: u32) -> TimeResult<Self> {
        if start_hour > 23 || end_hour > 24 {
            return Err(TimeError::InvalidConfig(format!(
                "operating hours {start_hour}-{end_hour} are outside the day"
            )));
        }
        if start_hour >= end_hour {
            return Err(TimeError::InvalidConfig(format!(
                "opening hour {start_hour} must be before closing hour {end_hour}"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Opening instant on `day`.
    pub fn opens_on(&self, day: NaiveDate) -> TimeResult<NaiveDateTime> {
        hour_on(day, self.start_hour)
    }

    /// Closing instant on `day`. Rolls over to the next midnight when
    /// `end_hour` is 24.
    pub fn closes_on(&self, day: NaiveDate) -> TimeResult<NaiveDateTime> {
        hour_on(day, self.end_hour)
    }
}

fn hour_on(day: NaiveDate, hour: u32) -> TimeResult<NaiveDateTime> {
    day.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(i64::from(hour)))
        .ok_or_else(|| {
            TimeError::Validation(format!(
                "hour {hour} of {day} is outside the supported calendar range"
            ))
        })
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            start_hour: Self::DEFAULT_START_HOUR,
            end_hour: Self::DEFAULT_END_HOUR,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingHoursRequest {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TryFrom<OperatingHoursRequest> for OperatingHours {
    type Error = TimeError;

    fn try_from(value: OperatingHoursRequest) -> TimeResult<Self> {
        OperatingHours::new(value.start_hour, value.end_hour)
    }
}

impl From<OperatingHours> for OperatingHoursRequest {
    fn from(hours: OperatingHours) -> Self {
        Self {
            start_hour: hours.start_hour,
            end_hour: hours.end_hour,
        }
    }
}
