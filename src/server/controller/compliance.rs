use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query, State,
    },
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        compliance::{
            ComplianceDocumentDto, DocumentStatus, PaginatedComplianceDocumentsDto,
            ReviewDocumentDto,
        },
    },
    server::{
        controller::{json, ok, path, query},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::compliance::{DocumentFilter, ReviewDocumentParams},
        service::compliance::ComplianceService,
        state::AppState,
        util::pagination::PaginationParams,
    },
};

pub static COMPLIANCE_TAG: &str = "compliance";

#[derive(Deserialize)]
pub struct DocumentListQuery {
    pub status: Option<DocumentStatus>,
    pub contractor_id: Option<i32>,
    pub page: Option<u64>,
    pub entries: Option<u64>,
}

impl DocumentListQuery {
    fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();

        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            entries: self.entries.unwrap_or(defaults.entries),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/compliance/documents",
    tag = COMPLIANCE_TAG,
    params(
        ("status" = Option<DocumentStatus>, Query, description = "Filter by document status"),
        ("contractor_id" = Option<i32>, Query, description = "Filter by contractor"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of documents, newest first", body = ApiResponse<PaginatedComplianceDocumentsDto>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<DocumentListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = query(params)?;
    let pagination = params.pagination().validate()?;

    let documents = ComplianceService::new(&state.db)
        .get_paginated(
            DocumentFilter {
                status: params.status,
                contractor_id: params.contractor_id,
            },
            pagination.page,
            pagination.entries,
        )
        .await?;

    Ok(ok(documents.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/compliance/documents/{id}",
    tag = COMPLIANCE_TAG,
    params(
        ("id" = i32, Path, description = "Compliance document ID")
    ),
    responses(
        (status = 200, description = "The document", body = ApiResponse<ComplianceDocumentDto>),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 404, description = "Document not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let id = path(id)?;

    let document = ComplianceService::new(&state.db).get_by_id(id).await?;

    Ok(ok(document.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/compliance/documents/{id}/review",
    tag = COMPLIANCE_TAG,
    params(
        ("id" = i32, Path, description = "Compliance document ID")
    ),
    request_body = ReviewDocumentDto,
    responses(
        (status = 200, description = "Reviewed document", body = ApiResponse<ComplianceDocumentDto>),
        (status = 400, description = "Invalid review", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot review documents", body = ErrorResponseDto),
        (status = 404, description = "Document not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn review_document(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReviewDocumentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReviewDocuments])
        .await?;

    let id = path(id)?;
    let payload = json(payload)?;

    let document = ComplianceService::new(&state.db)
        .review(ReviewDocumentParams {
            document_id: id,
            decision: payload.decision,
            notes: payload.notes,
            reviewer_id: user.id,
        })
        .await?;

    Ok(ok(document.into_dto()))
}
