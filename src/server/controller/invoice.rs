use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        invoice::{InvoiceStatus, PaginatedInvoicesDto},
    },
    server::{
        controller::{ok, query},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::invoice::InvoiceService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

pub static INVOICE_TAG: &str = "invoice";

#[derive(Deserialize)]
pub struct InvoiceListQuery {
    pub status: Option<InvoiceStatus>,
    pub page: Option<u64>,
    pub entries: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    params(
        ("status" = Option<InvoiceStatus>, Query, description = "Filter by invoice status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of invoices", body = ApiResponse<PaginatedInvoicesDto>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot manage payments", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<InvoiceListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManagePayments])
        .await?;

    let params = query(params)?;
    let defaults = PaginationParams::default();
    let pagination = PaginationParams {
        page: params.page.unwrap_or(defaults.page),
        entries: params.entries.unwrap_or(defaults.entries),
    }
    .validate()?;

    let invoices = InvoiceService::new(&state.db)
        .get_paginated(params.status, pagination.page, pagination.entries)
        .await?;

    Ok(ok(invoices.into_dto()))
}
