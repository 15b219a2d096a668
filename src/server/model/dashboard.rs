use chrono::{DateTime, Utc};

use crate::model::dashboard::{DashboardSummaryDto, ExpiringDocumentDto};

/// Window used by the summary's "expiring soon" counter.
pub const EXPIRING_SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub contractors: u64,
    pub documents_pending_review: u64,
    pub documents_expiring_soon: u64,
    pub invoices_pending: u64,
    pub invoices_blocked: u64,
}

impl DashboardSummary {
    pub fn into_dto(self) -> DashboardSummaryDto {
        DashboardSummaryDto {
            contractors: self.contractors,
            documents_pending_review: self.documents_pending_review,
            documents_expiring_soon: self.documents_expiring_soon,
            invoices_pending: self.invoices_pending,
            invoices_blocked: self.invoices_blocked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringDocument {
    pub document_id: i32,
    pub contractor_id: i32,
    pub contractor_name: Option<String>,
    pub document_type: String,
    pub expires_at: DateTime<Utc>,
}

impl ExpiringDocument {
    /// Whole days left at `now`, rounded down.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_days()
    }

    pub fn into_dto(self, now: DateTime<Utc>) -> ExpiringDocumentDto {
        ExpiringDocumentDto {
            days_remaining: self.days_remaining(now),
            document_id: self.document_id,
            contractor_id: self.contractor_id,
            contractor_name: self.contractor_name,
            document_type: self.document_type,
            expires_at: self.expires_at,
        }
    }
}
