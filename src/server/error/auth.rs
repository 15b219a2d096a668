use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api::ErrorCode, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session; the request is not signed in.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user profile that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The signed-in user's role lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state in the login callback does not match the session value.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code with the identity provider failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The identity provider returned an unusable userinfo payload.
    #[error("Invalid userinfo response: {0}")]
    InvalidUserInfo(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` / `InvalidUserInfo` → 500 Internal Server Error
///
/// Details are logged server-side while client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::FORBIDDEN,
                    ErrorCode::Forbidden,
                    "You do not have permission to perform this action",
                )
            }
            Self::CsrfValidationFailed => error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) | Self::InvalidUserInfo(_) => {
                tracing::error!("{}", self);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    "Internal server error",
                )
            }
        }
    }
}
