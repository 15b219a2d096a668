use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query, State,
    },
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        user::{PaginatedUsersDto, SetUserRoleDto, UserDto},
    },
    server::{
        controller::{json, ok, path, query},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of users", body = ApiResponse<PaginatedUsersDto>),
        (status = 400, description = "Invalid pagination", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Not an admin", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pagination = query(pagination)?.validate()?;

    let users = UserService::new(&state.db)
        .get_paginated(pagination.page, pagination.entries)
        .await?;

    Ok(ok(users.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User profile ID")
    ),
    request_body = SetUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid role", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Not an admin", body = ErrorResponseDto),
        (status = 404, description = "User not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SetUserRoleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let id = path(id)?;
    let payload = json(payload)?;

    let user = UserService::new(&state.db)
        .set_role(id, payload.role, admin.id)
        .await?;

    Ok(ok(user.into_dto()))
}
