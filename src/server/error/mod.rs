//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler, service and startup
//! routine. It wraps domain-specific errors and implements `IntoResponse`, producing the
//! uniform `{ success: false, error: { code, message } }` envelope with these mappings:
//!
//! - 401 `UNAUTHORIZED`
//! - 403 `FORBIDDEN`
//! - 400 `BAD_REQUEST`
//! - 404 `NOT_FOUND`
//! - 500 `INTERNAL_ERROR` (details logged, generic message returned)

pub mod auth;
pub mod config;
pub mod gas_safe;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorResponseDto},
    server::error::{auth::AuthError, config::ConfigError, gas_safe::GasSafeError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. `AuthError` and
/// `GasSafeError` handle their own response mapping, the generic variants map to fixed
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401, 403 or 400).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Gas Safe validation or register lookup error.
    ///
    /// Delegates to `GasSafeError::into_response()` (400 or 500).
    #[error(transparent)]
    GasSafeErr(#[from] GasSafeError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic message.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the failure envelope for the given status and code.
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponseDto::new(code, message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::GasSafeErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, msg),
            Self::BadRequest(msg) => {
                error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error and returns a generic message so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            "Internal server error",
        )
    }
}
