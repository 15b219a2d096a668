use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        dashboard::{ActivityDto, DashboardSummaryDto, ExpiringDocumentDto, PaymentBlockDto},
    },
    server::{
        controller::{ok, query},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{activity::Activity, invoice::PaymentBlock},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

#[derive(Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i64>,
}

#[derive(Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Headline counters", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = DashboardService::new(&state.db).summary().await?;

    Ok(ok(summary.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/expiring-documents",
    tag = DASHBOARD_TAG,
    params(
        ("days" = Option<i64>, Query, description = "Look-ahead window in days (default: 30, 1-365)")
    ),
    responses(
        (status = 200, description = "Documents expiring in the window, soonest first", body = ApiResponse<Vec<ExpiringDocumentDto>>),
        (status = 400, description = "Window out of range", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_expiring_documents(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ExpiringQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = query(params)?;

    let now = Utc::now();
    let documents: Vec<_> = DashboardService::new(&state.db)
        .expiring_documents(params.days)
        .await?
        .into_iter()
        .map(|document| document.into_dto(now))
        .collect();

    Ok(ok(documents))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/payment-blocks",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Blocked invoices with reasons", body = ApiResponse<Vec<PaymentBlockDto>>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_payment_blocks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let blocks: Vec<_> = DashboardService::new(&state.db)
        .payment_blocks()
        .await?
        .into_iter()
        .map(PaymentBlock::into_dto)
        .collect();

    Ok(ok(blocks))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recent-activity",
    tag = DASHBOARD_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Number of entries (default: 10, 1-100)")
    ),
    responses(
        (status = 200, description = "Newest activity first", body = ApiResponse<Vec<ActivityDto>>),
        (status = 400, description = "Limit out of range", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_recent_activity(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ActivityQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = query(params)?;

    let activity: Vec<_> = DashboardService::new(&state.db)
        .recent_activity(params.limit)
        .await?
        .into_iter()
        .map(Activity::into_dto)
        .collect();

    Ok(ok(activity))
}
