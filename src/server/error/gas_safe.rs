use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api::ErrorCode, server::error::error_response};

#[derive(Error, Debug)]
pub enum GasSafeError {
    /// Licence number is not exactly 7 digits after normalization.
    #[error("Invalid Gas Safe licence number '{0}': expected 7 digits")]
    InvalidLicence(String),

    /// The register answered with an unexpected HTTP status.
    #[error("Gas Safe register returned status {status} for licence {licence_number}")]
    Upstream {
        licence_number: String,
        status: u16,
    },

    /// The register request failed or its body could not be decoded.
    #[error("Gas Safe register request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Converts Gas Safe errors into HTTP responses.
///
/// - `InvalidLicence` → 400 Bad Request
/// - `Upstream` / `Request` → 500 Internal Server Error with a generic message
impl IntoResponse for GasSafeError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidLicence(_) => error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                "Invalid Gas Safe licence number, expected 7 digits",
            ),
            err => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    "Gas Safe verification is currently unavailable",
                )
            }
        }
    }
}
