//! # Error Handling Middleware
//!
//! Maps the domain error taxonomy to HTTP status codes and JSON error
//! responses so every endpoint fails the same way. No error propagates
//! far enough to crash the serving surface; everything becomes status
//! text here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotsync_core::errors::SlotError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`SlotError`] instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SlotError::HourOutOfRange(_) => StatusCode::BAD_REQUEST,
            SlotError::UnrecognizedDate(_) => StatusCode::BAD_REQUEST,
            SlotError::EmptyClipboard(_) => StatusCode::BAD_REQUEST,
            SlotError::TargetNotFound(_) => StatusCode::NOT_FOUND,
            SlotError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, SlotError>` in
/// handlers that return `Result<T, AppError>`.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with functions returning `Result<T, eyre::Report>`,
/// wrapping the report as a store-side failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Store(err))
    }
}
