//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the TeeTime API.
//! It maps domain errors to HTTP status codes and JSON error responses so that
//! every endpoint reports failures the same way.
//!
//! Business-rule outcomes (an invalid duration, an occupied slot) are not
//! errors and never pass through here; they are returned as regular data.
//! Only malformed input and server faults do.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde_json::json;
use teetime_core::errors::TimeError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use teetime_api::middleware::error_handling::AppError;
/// use teetime_core::models::time_slot::{TimeSlot, TimeSlotRequest};
///
/// async fn handler(Json(raw): Json<TimeSlotRequest>) -> Result<Json<TimeSlot>, AppError> {
///     let slot = TimeSlot::try_from(raw)?;
///     Ok(Json(slot))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TimeError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TimeError::Validation(_) => StatusCode::BAD_REQUEST,
            TimeError::InvalidSlot { .. } => StatusCode::BAD_REQUEST,
            TimeError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            TimeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Rejected request");
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `TimeResult` inside handlers returning `Result<T, AppError>`.
impl From<TimeError> for AppError {
    fn from(err: TimeError) -> Self {
        AppError(err)
    }
}

/// Bodies that fail to parse, including values rejected by a checked
/// constructor during deserialization, are reported like any other
/// malformed input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(TimeError::Validation(rejection.body_text()))
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimeError::Internal(err))
    }
}

/// JSON body extractor whose rejections go through [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Maps a TimeError to an HTTP response
pub fn map_error(err: TimeError) -> Response {
    AppError(err).into_response()
}

/// Converts failures from the timeout layer into responses.
pub async fn handle_timeout(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        let body = Json(json!({ "error": "Request timed out" }));
        return (StatusCode::REQUEST_TIMEOUT, body).into_response();
    }

    map_error(TimeError::Internal(eyre::eyre!("Unhandled middleware error: {err}")))
}
