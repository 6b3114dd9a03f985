use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{TimeError, TimeResult};

/// A half-open interval `[start, end)` of venue-local wall-clock time.
///
/// Used both for a requested booking and for an interval already taken by a
/// reservation. The only way to build one is [`TimeSlot::new`], which rejects
/// `end <= start`; deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeSlotRequest")]
pub struct TimeSlot {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> TimeResult<Self> {
        if end <= start {
            return Err(TimeError::InvalidSlot { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns true when the two intervals share any instant.
    ///
    /// A slot that ends exactly when `other` starts (or starts exactly when it
    /// ends) does not overlap it.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        let starts_inside = self.start >= other.start && self.start < other.end;
        let ends_inside = self.end > other.start && self.end <= other.end;
        let contains = self.start <= other.start && self.end >= other.end;

        starts_inside || ends_inside || contains
    }
}

/// Unchecked wire shape of a slot, as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TryFrom<TimeSlotRequest> for TimeSlot {
    type Error = TimeError;

    fn try_from(value: TimeSlotRequest) -> TimeResult<Self> {
        TimeSlot::new(value.start, value.end)
    }
}

impl From<TimeSlot> for TimeSlotRequest {
    fn from(slot: TimeSlot) -> Self {
        Self {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// What created an occupied interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationKind {
    /// A customer booking.
    #[default]
    Booking,
    /// An operator hold on the bay. Blocks availability exactly like a booking.
    AdminBlock,
}

/// An interval that is already taken on a bay.
///
/// Deserializes through [`ReservationRequest`], so an empty or backwards
/// interval is rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReservationRequest", into = "ReservationRequest")]
pub struct Reservation {
    pub slot: TimeSlot,
    pub kind: ReservationKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub kind: ReservationKind,
}

impl TryFrom<ReservationRequest> for Reservation {
    type Error = TimeError;

    fn try_from(value: ReservationRequest) -> TimeResult<Self> {
        Ok(Self {
            slot: TimeSlot::new(value.start, value.end)?,
            kind: value.kind,
        })
    }
}

impl From<Reservation> for ReservationRequest {
    fn from(reservation: Reservation) -> Self {
        Self {
            start: reservation.slot.start,
            end: reservation.slot.end,
            kind: reservation.kind,
        }
    }
}
