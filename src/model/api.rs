use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable error codes returned in the `error.code` field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    BadRequest,
    NotFound,
    InternalError,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApiErrorDto {
    pub code: ErrorCode,
    pub message: String,
}

/// Uniform response envelope: `{ success, data?, error? }`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorDto>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Envelope used for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorResponseDto {
    pub success: bool,
    pub error: ApiErrorDto,
}

impl ErrorResponseDto {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ApiErrorDto {
                code,
                message: message.into(),
            },
        }
    }
}
