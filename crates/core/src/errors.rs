use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time slot: end {end} must be after start {start}")]
    InvalidSlot {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type TimeResult<T> = Result<T, TimeError>;
