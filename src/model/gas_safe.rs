use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::compliance::ComplianceDocumentDto;

/// Gas Safe register entry for a licence number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GasSafeRecordDto {
    pub licence_number: String,
    pub engineer_name: Option<String>,
    pub business_name: Option<String>,
    pub registration_status: String,
    pub is_valid: bool,
    pub registration_expires_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
    /// Whether the record was served from the 24-hour cache.
    pub cached: bool,
}

/// Request body for verifying a licence against a contractor record.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct VerifyGasSafeDto {
    pub licence_number: String,
    pub contractor_id: i32,
    /// Document to mark verified; defaults to the contractor's latest `gas_safe` document.
    pub document_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GasSafeVerificationDto {
    pub contractor_id: i32,
    pub record: GasSafeRecordDto,
    pub verified: bool,
    pub document: Option<ComplianceDocumentDto>,
}
