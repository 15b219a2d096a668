use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Query, State,
    },
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorResponseDto},
        gas_safe::{GasSafeRecordDto, GasSafeVerificationDto, VerifyGasSafeDto},
    },
    server::{
        controller::{json, ok, query},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::gas_safe::VerifyContractorParams,
        service::gas_safe::GasSafeService,
        state::AppState,
    },
};

pub static VERIFICATION_TAG: &str = "verification";

#[derive(Deserialize)]
pub struct LicenceQuery {
    pub licence: String,
}

/// Looks a licence up on the Gas Safe register, served from cache when fresh.
#[utoipa::path(
    get,
    path = "/api/verification/gas-safe",
    tag = VERIFICATION_TAG,
    params(
        ("licence" = String, Query, description = "Gas Safe licence number (7 digits)")
    ),
    responses(
        (status = 200, description = "Register entry", body = ApiResponse<GasSafeRecordDto>),
        (status = 400, description = "Invalid licence number", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 500, description = "Register unavailable", body = ErrorResponseDto)
    ),
)]
pub async fn lookup_licence(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<LicenceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = query(params)?;

    let result = GasSafeService::new(&state.db, state.gas_safe.as_ref())
        .lookup(&params.licence)
        .await?;

    Ok(ok(result.into_dto()))
}

/// Verifies a contractor's licence and marks their Gas Safe document verified when the
/// registration is valid. Every attempt is written to the verification log.
#[utoipa::path(
    post,
    path = "/api/verification/gas-safe",
    tag = VERIFICATION_TAG,
    request_body = VerifyGasSafeDto,
    responses(
        (status = 200, description = "Verification outcome", body = ApiResponse<GasSafeVerificationDto>),
        (status = 400, description = "Invalid licence number, body or document type", body = ErrorResponseDto),
        (status = 401, description = "Not signed in", body = ErrorResponseDto),
        (status = 403, description = "Role cannot review documents", body = ErrorResponseDto),
        (status = 404, description = "Contractor or document not found", body = ErrorResponseDto),
        (status = 500, description = "Register unavailable", body = ErrorResponseDto)
    ),
)]
pub async fn verify_licence(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<VerifyGasSafeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReviewDocuments])
        .await?;

    let payload = json(payload)?;

    let verification = GasSafeService::new(&state.db, state.gas_safe.as_ref())
        .verify_for_contractor(VerifyContractorParams {
            licence_number: payload.licence_number,
            contractor_id: payload.contractor_id,
            document_id: payload.document_id,
            performed_by: user.id,
        })
        .await?;

    Ok(ok(verification.into_dto()))
}
