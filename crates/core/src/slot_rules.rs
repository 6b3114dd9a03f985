//! # Slot Rules
//!
//! Booking rules shared by every calendar view: legal durations, rounding of a
//! dragged selection to a legal duration, overlap checks against existing
//! reservations, and enumeration of the free slots left on a day.
//!
//! ## Duration policy
//!
//! A booking of exactly the configured minimum is always accepted. Any other
//! duration must sit a whole number of increments away from the first hour
//! (`60 + k * increment`), within the configured bounds.
//!
//! ## Overlap policy
//!
//! Slots are half-open. Two bookings that touch at an instant (one ends at
//! 15:00, the next starts at 15:00) do not conflict.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::errors::{TimeError, TimeResult};
use crate::models::{
    duration::{DurationConfig, DurationViolation, Minutes, ValidationResult},
    pricing::PriceBreakdown,
    time_slot::TimeSlot,
    venue::OperatingHours,
};

/// Length of the first hour that the increment rule extends.
pub const FIRST_HOUR_MINUTES: Minutes = 60;

/// Spacing between candidate start times when scanning a day.
pub const START_GRANULARITY_MINUTES: Minutes = 30;

/// Offset of `duration` from the next-lower increment boundary.
///
/// Durations under the first hour are measured backwards from it, so the
/// result is always in `0..increment`.
fn increment_remainder(duration: Minutes, increment: Minutes) -> Minutes {
    let offset = i64::from(duration) - i64::from(FIRST_HOUR_MINUTES);
    // rem_euclid of a u32-range value by a positive u32 fits back into u32
    offset.rem_euclid(i64::from(increment)) as Minutes
}

/// Checks a duration against the config, reporting the first rule it breaks.
pub fn check_duration(
    duration: Minutes,
    config: &DurationConfig,
) -> Result<(), DurationViolation> {
    if duration < config.min_duration_minutes() {
        return Err(DurationViolation::BelowMinimum {
            minimum: config.min_duration_minutes(),
        });
    }
    if duration > config.max_duration_minutes() {
        return Err(DurationViolation::AboveMaximum {
            maximum: config.max_duration_minutes(),
        });
    }
    if duration == config.min_duration_minutes() {
        return Ok(());
    }

    let increment = config.increment_after_first_hour_minutes();
    if increment_remainder(duration, increment) != 0 {
        return Err(DurationViolation::MisalignedIncrement { increment });
    }

    Ok(())
}

/// Validates a requested duration. Never fails; the reason for a rejection is
/// carried in the result.
pub fn is_valid_duration(duration: Minutes, config: &DurationConfig) -> ValidationResult {
    check_duration(duration, config).into()
}

/// All bookable durations under `config`, shortest first.
///
/// The minimum comes first, followed by every increment boundary above it
/// that does not exceed the maximum.
pub fn generate_duration_options(config: &DurationConfig) -> Vec<Minutes> {
    let min = config.min_duration_minutes();
    let max = config.max_duration_minutes();
    let increment = config.increment_after_first_hour_minutes();

    let mut options = vec![min];

    let mut next = if min < FIRST_HOUR_MINUTES {
        FIRST_HOUR_MINUTES - (FIRST_HOUR_MINUTES - min) / increment * increment
    } else {
        min - increment_remainder(min, increment)
    };
    if next <= min {
        next = match next.checked_add(increment) {
            Some(value) => value,
            None => return options,
        };
    }

    while next <= max {
        options.push(next);
        next = match next.checked_add(increment) {
            Some(value) => value,
            None => break,
        };
    }

    options
}

/// Snaps a duration onto the nearest bookable option.
///
/// Out-of-range values clamp to the minimum or to the longest option. Values
/// off an increment boundary round to the nearest boundary, with exact
/// midpoints rounding up; `round_up` forces rounding up. A round-up that
/// would pass the longest option rounds down instead.
pub fn round_to_valid_duration(
    duration: Minutes,
    config: &DurationConfig,
    round_up: bool,
) -> Minutes {
    let min = config.min_duration_minutes();
    let ceiling = generate_duration_options(config)
        .last()
        .copied()
        .unwrap_or(min);

    if duration <= min {
        return min;
    }
    if duration >= ceiling {
        return ceiling;
    }
    if check_duration(duration, config).is_ok() {
        return duration;
    }

    let increment = config.increment_after_first_hour_minutes();
    let remainder = increment_remainder(duration, increment);
    let down = duration - remainder;
    let up = duration.saturating_add(increment - remainder);

    let rounded = if round_up || remainder * 2 >= increment {
        up
    } else {
        down
    };

    if rounded > ceiling {
        down.max(min)
    } else if rounded < min {
        min
    } else {
        rounded
    }
}

/// Returns false if `candidate` overlaps any of `existing`.
pub fn is_slot_available<'a, I>(candidate: &TimeSlot, existing: I) -> bool
where
    I: IntoIterator<Item = &'a TimeSlot>,
{
    existing.into_iter().all(|taken| !candidate.overlaps(taken))
}

/// Every free `(start, duration)` combination on `day`.
///
/// Starts step by [`START_GRANULARITY_MINUTES`] from opening up to closing;
/// for each start, every duration option that ends by closing and clears all
/// of `existing` is kept. Output is ordered by start time, then by duration.
///
/// # Errors
///
/// * `TimeError::Validation` - opening or closing on `day` is not a
///   representable timestamp
pub fn find_available_slots(
    day: NaiveDate,
    existing: &[TimeSlot],
    config: &DurationConfig,
    hours: &OperatingHours,
) -> TimeResult<Vec<TimeSlot>> {
    let options = generate_duration_options(config);
    let opens = hours.opens_on(day)?;
    let closes = hours.closes_on(day)?;
    let step = Duration::minutes(i64::from(START_GRANULARITY_MINUTES));

    let mut slots = Vec::new();
    let mut start = opens;
    while start < closes {
        for &duration in &options {
            let Ok(end) = calculate_end_time(start, duration) else {
                break;
            };
            if end > closes {
                break;
            }
            let Ok(candidate) = TimeSlot::new(start, end) else {
                continue;
            };
            if is_slot_available(&candidate, existing) {
                slots.push(candidate);
            }
        }
        start = match start.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(slots)
}

/// `start` plus `duration` minutes. Wraps past midnight onto the next day.
///
/// # Errors
///
/// * `TimeError::Validation` - the end would fall outside the supported
///   calendar range
pub fn calculate_end_time(start: NaiveDateTime, duration: Minutes) -> TimeResult<NaiveDateTime> {
    start
        .checked_add_signed(Duration::minutes(i64::from(duration)))
        .ok_or_else(|| {
            TimeError::Validation(format!(
                "a {duration}-minute booking from {start} ends outside the supported calendar range"
            ))
        })
}

/// Whole minutes from `start` to `end`. Partial minutes are dropped.
pub fn calculate_duration(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

pub fn crosses_midnight(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    start.date() != end.date()
}

/// Human-readable duration: "45 min", "1 hour", "3 hours", "1h 30m".
pub fn format_duration(minutes: Minutes) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;

    match (hours, remainder) {
        (0, m) => format!("{m} min"),
        (1, 0) => "1 hour".to_string(),
        (h, 0) => format!("{h} hours"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Prices a session. Each figure is computed from unrounded inputs and
/// rounded to cents independently.
pub fn calculate_price(
    duration: Minutes,
    hourly_rate: f64,
    discount_percent: f64,
) -> PriceBreakdown {
    let base_price = hourly_rate * f64::from(duration) / 60.0;
    let discount = base_price * discount_percent / 100.0;
    let final_price = base_price - discount;

    PriceBreakdown {
        base_price: round_to_cents(base_price),
        discount: round_to_cents(discount),
        final_price: round_to_cents(final_price),
    }
}

/// The next longer option after `current`, or `None` when `current` is the
/// longest option or not an option at all.
pub fn get_upsell_duration(current: Minutes, config: &DurationConfig) -> Option<Minutes> {
    let options = generate_duration_options(config);
    let position = options.iter().position(|&option| option == current)?;
    options.get(position + 1).copied()
}
