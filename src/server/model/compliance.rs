//! Compliance document domain models and the payment-block rules derived from them.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::compliance::{
        ComplianceDocumentDto, DocumentStatus, PaginatedComplianceDocumentsDto, ReviewDecision,
    },
    server::error::AppError,
};

/// Document types every contractor must hold before an invoice can be paid, with the
/// label used in block reasons.
pub const REQUIRED_DOCUMENTS: [(&str, &str); 2] = [
    ("gas_safe", "Gas Safe certificate"),
    ("public_liability", "Public liability insurance"),
];

pub const GAS_SAFE_DOCUMENT_TYPE: &str = "gas_safe";

/// Score recorded on a document verified against the Gas Safe register.
pub const VERIFIED_SCORE: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceDocument {
    pub id: i32,
    pub contractor_id: i32,
    pub document_type: String,
    pub reference: Option<String>,
    pub status: DocumentStatus,
    pub verification_score: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ComplianceDocument {
    /// Converts an entity model into the domain model.
    ///
    /// # Returns
    /// - `Err(AppError::InternalError)` - The stored status is not a known status
    pub fn from_entity(entity: entity::compliance_document::Model) -> Result<Self, AppError> {
        let status = DocumentStatus::from_str(&entity.status).map_err(AppError::InternalError)?;

        Ok(Self {
            id: entity.id,
            contractor_id: entity.contractor_id,
            document_type: entity.document_type,
            reference: entity.reference,
            status,
            verification_score: entity.verification_score,
            expires_at: entity.expires_at,
            verified_at: entity.verified_at,
            reviewed_by: entity.reviewed_by,
            reviewed_at: entity.reviewed_at,
            review_notes: entity.review_notes,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ComplianceDocumentDto {
        ComplianceDocumentDto {
            id: self.id,
            contractor_id: self.contractor_id,
            document_type: self.document_type,
            reference: self.reference,
            status: self.status,
            verification_score: self.verification_score,
            expires_at: self.expires_at,
            verified_at: self.verified_at,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at,
            review_notes: self.review_notes,
            created_at: self.created_at,
        }
    }

    /// Verified and not past its expiry (documents without expiry never lapse).
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.status == DocumentStatus::Verified && self.expires_at.is_none_or(|at| at > now)
    }

    /// Marked expired, or its expiry has passed.
    pub fn has_lapsed(&self, now: DateTime<Utc>) -> bool {
        self.status == DocumentStatus::Expired || self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Decides whether a contractor's invoices may be paid.
///
/// Rules are checked in order and the first failure becomes the block reason:
/// 1. the contractor must be active;
/// 2. for each required document type there must be a current verified document.
///    Missing types, lapsed documents and unverified documents each get their own reason.
///
/// # Returns
/// - `None` - Payment may proceed
/// - `Some(reason)` - Payment must be blocked
pub fn assess_payment_block(
    contractor_active: bool,
    documents: &[ComplianceDocument],
    now: DateTime<Utc>,
) -> Option<String> {
    if !contractor_active {
        return Some("Contractor is not active".to_string());
    }

    for (document_type, label) in REQUIRED_DOCUMENTS {
        let of_type: Vec<&ComplianceDocument> = documents
            .iter()
            .filter(|doc| doc.document_type == document_type)
            .collect();

        if of_type.is_empty() {
            return Some(format!("Missing {}", label));
        }

        if of_type.iter().any(|doc| doc.is_current(now)) {
            continue;
        }

        if of_type.iter().any(|doc| doc.has_lapsed(now)) {
            return Some(format!("{} expired", label));
        }

        return Some(format!("{} not verified", label));
    }

    None
}

/// Optional filters for listing compliance documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub status: Option<DocumentStatus>,
    pub contractor_id: Option<i32>,
}

/// Parameters for a manual document review.
#[derive(Debug, Clone)]
pub struct ReviewDocumentParams {
    pub document_id: i32,
    pub decision: ReviewDecision,
    pub notes: Option<String>,
    pub reviewer_id: i32,
}

impl ReviewDocumentParams {
    /// Status the document moves to for this decision.
    pub fn resulting_status(&self) -> DocumentStatus {
        match self.decision {
            ReviewDecision::Approve => DocumentStatus::Verified,
            ReviewDecision::Reject => DocumentStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedComplianceDocuments {
    pub documents: Vec<ComplianceDocument>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedComplianceDocuments {
    pub fn into_dto(self) -> PaginatedComplianceDocumentsDto {
        PaginatedComplianceDocumentsDto {
            documents: self
                .documents
                .into_iter()
                .map(ComplianceDocument::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
