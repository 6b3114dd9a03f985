//! # TeeTime Core
//!
//! Booking rules for simulator bays: which durations may be booked, how a
//! requested duration snaps to a bookable one, whether a slot collides with
//! existing reservations, and which slots are still free on a given day.
//!
//! Every operation in [`slot_rules`] is a pure function over the value types in
//! [`models`]. Those types can only be constructed through checked
//! constructors, so malformed slots or configs are rejected with a
//! [`errors::TimeError`] before any rule runs.

pub mod errors;
pub mod models;
pub mod slot_rules;
