//! Error types for the Floodwatch API.
//!
//! [`ApiError`] has a single failure mode, a request body that cannot
//! carry a reading. It converts into the fixed `400` body the sensor
//! firmware expects via its [`IntoResponse`] implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use floodwatch_core::ReadingError;
use serde::Serialize;

/// Message returned to the caller for every rejected body.
pub const JSON_REQUIRED: &str = "JSON required";

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `/data` body was missing, not JSON, or not a JSON object.
    #[error("bad request: {reason}")]
    BadRequest {
        /// Diagnostic detail for the log. Not sent to the caller.
        reason: String,
    },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            reason: rejection.body_text(),
        }
    }
}

impl From<ReadingError> for ApiError {
    fn from(err: ReadingError) -> Self {
        Self::BadRequest {
            reason: err.to_string(),
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => {
                tracing::warn!(%reason, "Rejected sensor submission");
                let body = ErrorBody {
                    status: "error",
                    message: JSON_REQUIRED,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
