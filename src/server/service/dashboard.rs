//! Aggregate reads behind the dashboard widgets.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{compliance::DocumentStatus, invoice::InvoiceStatus},
    server::{
        data::{
            activity_log::ActivityLogRepository,
            compliance_document::ComplianceDocumentRepository, contractor::ContractorRepository,
            invoice::InvoiceRepository,
        },
        error::AppError,
        model::{
            activity::Activity,
            dashboard::{DashboardSummary, ExpiringDocument, EXPIRING_SOON_DAYS},
            invoice::PaymentBlock,
        },
    },
};

pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;
pub const MAX_EXPIRY_WINDOW_DAYS: i64 = 365;
pub const DEFAULT_ACTIVITY_LIMIT: u64 = 10;
pub const MAX_ACTIVITY_LIMIT: u64 = 100;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let now = Utc::now();
        let documents = ComplianceDocumentRepository::new(self.db);
        let invoices = InvoiceRepository::new(self.db);

        let documents_expiring_soon = documents
            .get_expiring_between(now, now + Duration::days(EXPIRING_SOON_DAYS))
            .await?
            .len() as u64;

        Ok(DashboardSummary {
            contractors: ContractorRepository::new(self.db).count().await?,
            documents_pending_review: documents.count_by_status(DocumentStatus::Pending).await?,
            documents_expiring_soon,
            invoices_pending: invoices.count_by_status(InvoiceStatus::Pending).await?,
            invoices_blocked: invoices.count_by_status(InvoiceStatus::Blocked).await?,
        })
    }

    /// Gets documents expiring within `days` (default 30), soonest first.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `days` outside `1..=365`
    pub async fn expiring_documents(
        &self,
        days: Option<i64>,
    ) -> Result<Vec<ExpiringDocument>, AppError> {
        let days = days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
        if !(1..=MAX_EXPIRY_WINDOW_DAYS).contains(&days) {
            return Err(AppError::BadRequest(format!(
                "days must be between 1 and {}",
                MAX_EXPIRY_WINDOW_DAYS
            )));
        }

        let now = Utc::now();
        ComplianceDocumentRepository::new(self.db)
            .get_expiring_between(now, now + Duration::days(days))
            .await
    }

    pub async fn payment_blocks(&self) -> Result<Vec<PaymentBlock>, AppError> {
        InvoiceRepository::new(self.db).get_blocked().await
    }

    /// Gets the newest activity rows (default 10).
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `limit` outside `1..=100`
    pub async fn recent_activity(&self, limit: Option<u64>) -> Result<Vec<Activity>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
        if !(1..=MAX_ACTIVITY_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_ACTIVITY_LIMIT
            )));
        }

        let activity = ActivityLogRepository::new(self.db).get_recent(limit).await?;

        Ok(activity)
    }
}
