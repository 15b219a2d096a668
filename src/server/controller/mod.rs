//! HTTP handlers.
//!
//! Every protected handler calls `AuthGuard::require` before looking at its input.
//! Extractors that can reject (`Json`, `Query`, `Path`) are therefore taken as
//! `Result<_, Rejection>` and only unwrapped after the guard passes, so a signed-out
//! request always gets 401 whatever it sends.

pub mod admin;
pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod invoice;
pub mod payment_run;
pub mod verification;

#[cfg(test)]
mod test;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::{model::api::ApiResponse, server::error::AppError};

/// Unwraps a deferred `Query` extraction into a 400 on failure.
pub fn query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Unwraps a deferred `Json` extraction into a 400 on failure.
pub fn json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Unwraps a deferred `Path` extraction into a 400 on failure.
pub fn path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|Path(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Wraps `data` in the success envelope with a 200 status.
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::ok(data)))
}
