//! Gas Safe register models and licence validation.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::gas_safe::{GasSafeRecordDto, GasSafeVerificationDto},
    server::{error::gas_safe::GasSafeError, model::compliance::ComplianceDocument},
};

/// Cached register lookups younger than this are served without calling the register.
pub const CACHE_FRESHNESS_HOURS: i64 = 24;

const LICENCE_DIGITS: usize = 7;

/// Registration status recorded when the register has no entry for a licence.
pub const NOT_FOUND_STATUS: &str = "not_found";

const REGISTERED_STATUS: &str = "registered";

/// Normalizes a licence number and checks it is exactly 7 digits.
///
/// Whitespace and hyphens are stripped first, so `"123 4567"` and `"123-4567"` are both
/// accepted as `"1234567"`.
///
/// # Returns
/// - `Ok(String)` - Normalized licence number
/// - `Err(GasSafeError::InvalidLicence)` - Anything other than 7 ASCII digits remained
pub fn normalize_licence(raw: &str) -> Result<String, GasSafeError> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if normalized.len() != LICENCE_DIGITS || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return Err(GasSafeError::InvalidLicence(raw.to_string()));
    }

    Ok(normalized)
}

/// Oldest `fetched_at` still considered fresh at `now`.
pub fn freshness_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(CACHE_FRESHNESS_HOURS)
}

/// Entry as returned by the register, before it is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterEntry {
    pub engineer_name: Option<String>,
    pub business_name: Option<String>,
    pub registration_status: String,
    pub registration_expires_at: Option<DateTime<Utc>>,
}

impl RegisterEntry {
    /// Entry for a licence the register does not know.
    pub fn not_found() -> Self {
        Self {
            engineer_name: None,
            business_name: None,
            registration_status: NOT_FOUND_STATUS.to_string(),
            registration_expires_at: None,
        }
    }

    /// Registered and not past its registration expiry.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.registration_status.eq_ignore_ascii_case(REGISTERED_STATUS)
            && self.registration_expires_at.is_none_or(|at| at > now)
    }

    pub fn into_record(self, licence_number: String, now: DateTime<Utc>) -> GasSafeRecord {
        GasSafeRecord {
            is_valid: self.is_valid(now),
            licence_number,
            engineer_name: self.engineer_name,
            business_name: self.business_name,
            registration_status: self.registration_status,
            registration_expires_at: self.registration_expires_at,
            fetched_at: now,
        }
    }
}

/// Cached register record keyed by normalized licence number.
#[derive(Debug, Clone, PartialEq)]
pub struct GasSafeRecord {
    pub licence_number: String,
    pub engineer_name: Option<String>,
    pub business_name: Option<String>,
    pub registration_status: String,
    pub is_valid: bool,
    pub registration_expires_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
}

impl GasSafeRecord {
    pub fn from_entity(entity: entity::gas_safe_cache::Model) -> Self {
        Self {
            licence_number: entity.licence_number,
            engineer_name: entity.engineer_name,
            business_name: entity.business_name,
            registration_status: entity.registration_status,
            is_valid: entity.is_valid,
            registration_expires_at: entity.registration_expires_at,
            fetched_at: entity.fetched_at,
        }
    }
}

/// Lookup result, tagged with whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct GasSafeLookupResult {
    pub record: GasSafeRecord,
    pub cached: bool,
}

impl GasSafeLookupResult {
    pub fn into_dto(self) -> GasSafeRecordDto {
        GasSafeRecordDto {
            licence_number: self.record.licence_number,
            engineer_name: self.record.engineer_name,
            business_name: self.record.business_name,
            registration_status: self.record.registration_status,
            is_valid: self.record.is_valid,
            registration_expires_at: self.record.registration_expires_at,
            fetched_at: self.record.fetched_at,
            cached: self.cached,
        }
    }
}

/// Parameters for verifying a licence against a contractor.
#[derive(Debug, Clone)]
pub struct VerifyContractorParams {
    pub licence_number: String,
    pub contractor_id: i32,
    pub document_id: Option<i32>,
    pub performed_by: i32,
}

/// Outcome of a contractor verification.
///
/// `document` is the linked document after any update, or `None` when the contractor
/// holds no Gas Safe document.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractorVerification {
    pub contractor_id: i32,
    pub lookup: GasSafeLookupResult,
    pub document: Option<ComplianceDocument>,
}

impl ContractorVerification {
    pub fn into_dto(self) -> GasSafeVerificationDto {
        GasSafeVerificationDto {
            contractor_id: self.contractor_id,
            verified: self.lookup.record.is_valid,
            record: self.lookup.into_dto(),
            document: self.document.map(ComplianceDocument::into_dto),
        }
    }
}

/// Parameters for appending a verification audit row.
#[derive(Debug, Clone)]
pub struct CreateVerificationLogParams {
    pub contractor_id: Option<i32>,
    pub compliance_document_id: Option<i32>,
    pub licence_number: String,
    pub success: bool,
    pub detail: String,
    pub performed_by: i32,
}
