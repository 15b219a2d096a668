use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        payment_run::{
            PaginatedPaymentRunsDto, PaymentRunDetailDto, PaymentRunPreviewDto,
            PaymentRunResultDto,
        },
    },
    server::{
        controller::{ok, path, query},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::payment_run::PaymentRunService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

pub static PAYMENT_RUN_TAG: &str = "payment_run";

/// Runs payment processing over every pending invoice.
///
/// Compliant invoices move to `approved`, the rest to `blocked` with a reason. The whole
/// run commits atomically.
#[utoipa::path(
    post,
    path = "/api/internal/payment-run",
    tag = PAYMENT_RUN_TAG,
    responses(
        (status = 200, description = "Run executed", body = ApiResponse<PaymentRunResultDto>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot manage payments", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn execute_payment_run(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManagePayments])
        .await?;

    let outcome = PaymentRunService::new(&state.db).execute(user.id).await?;

    Ok(ok(outcome.into_dto()))
}

/// Shows how a payment run would classify the current pending invoices.
#[utoipa::path(
    get,
    path = "/api/internal/payment-run",
    tag = PAYMENT_RUN_TAG,
    responses(
        (status = 200, description = "Run preview", body = ApiResponse<PaymentRunPreviewDto>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot manage payments", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn preview_payment_run(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManagePayments])
        .await?;

    let plan = PaymentRunService::new(&state.db).preview().await?;

    Ok(ok(plan.into_preview_dto()))
}

#[utoipa::path(
    get,
    path = "/api/internal/payment-runs",
    tag = PAYMENT_RUN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of runs, newest first", body = ApiResponse<PaginatedPaymentRunsDto>),
        (status = 400, description = "Invalid pagination", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot manage payments", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_payment_runs(
    State(state): State<AppState>,
    session: Session,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManagePayments])
        .await?;

    let pagination = query(pagination)?.validate()?;

    let runs = PaymentRunService::new(&state.db)
        .get_paginated(pagination.page, pagination.entries)
        .await?;

    Ok(ok(runs.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/internal/payment-runs/{id}",
    tag = PAYMENT_RUN_TAG,
    params(
        ("id" = i32, Path, description = "Payment run ID")
    ),
    responses(
        (status = 200, description = "Run with its items", body = ApiResponse<PaymentRunDetailDto>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot manage payments", body = ErrorResponseDto),
        (status = 404, description = "Run not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_payment_run(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManagePayments])
        .await?;

    let id = path(id)?;

    let detail = PaymentRunService::new(&state.db).get_by_id(id).await?;

    Ok(ok(detail.into_dto()))
}
