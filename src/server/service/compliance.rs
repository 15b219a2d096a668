use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        activity_log::ActivityLogRepository, compliance_document::ComplianceDocumentRepository,
    },
    error::AppError,
    model::{
        activity::CreateActivityParams,
        compliance::{
            ComplianceDocument, DocumentFilter, PaginatedComplianceDocuments,
            ReviewDocumentParams,
        },
    },
    util::pagination::total_pages,
};

pub struct ComplianceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplianceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedComplianceDocuments, AppError> {
        let (documents, total) = ComplianceDocumentRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedComplianceDocuments {
            documents,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ComplianceDocument, AppError> {
        ComplianceDocumentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies a reviewer's decision and records it in the activity feed.
    ///
    /// The document update and its activity row commit together.
    ///
    /// # Returns
    /// - `Ok(ComplianceDocument)` - The reviewed document
    /// - `Err(AppError::NotFound)` - No document with that ID
    pub async fn review(
        &self,
        params: ReviewDocumentParams,
    ) -> Result<ComplianceDocument, AppError> {
        let txn = self.db.begin().await?;

        let document = ComplianceDocumentRepository::new(&txn)
            .review(&params, Utc::now())
            .await?
            .ok_or_else(|| not_found(params.document_id))?;

        ActivityLogRepository::new(&txn)
            .create(CreateActivityParams::new(
                Some(params.reviewer_id),
                "document_reviewed",
                "compliance_document",
                Some(document.id),
                format!(
                    "{} document {} marked {}",
                    document.document_type,
                    document.id,
                    document.status.as_str()
                ),
            ))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} reviewed compliance document {}: {}",
            params.reviewer_id,
            document.id,
            document.status.as_str()
        );

        Ok(document)
    }

    /// Marks every pending or verified document past its expiry as expired.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of documents expired
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let expired = ComplianceDocumentRepository::new(self.db)
            .expire_overdue(now)
            .await?;

        if expired > 0 {
            ActivityLogRepository::new(self.db)
                .create(CreateActivityParams::new(
                    None,
                    "documents_expired",
                    "compliance_document",
                    None,
                    format!("{} compliance documents expired", expired),
                ))
                .await?;
        }

        Ok(expired)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Compliance document {} not found", id))
}
