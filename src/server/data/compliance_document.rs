//! Compliance document repository.
//!
//! Documents are read for payment-block checks, listed and reviewed by reviewers, marked
//! verified by Gas Safe verification, and expired in bulk by the scheduler.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::compliance::DocumentStatus,
    server::{
        error::AppError,
        model::{
            compliance::{ComplianceDocument, DocumentFilter, ReviewDocumentParams, VERIFIED_SCORE},
            dashboard::ExpiringDocument,
        },
    },
};

pub struct ComplianceDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComplianceDocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ComplianceDocument>, AppError> {
        entity::prelude::ComplianceDocument::find_by_id(id)
            .one(self.db)
            .await?
            .map(ComplianceDocument::from_entity)
            .transpose()
    }

    /// Gets a page of documents, newest first, narrowed by the optional filters.
    ///
    /// # Returns
    /// - `Ok((documents, total))` - Documents on the requested page and the number of
    ///   documents matching the filter
    pub async fn get_paginated(
        &self,
        filter: &DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ComplianceDocument>, u64), AppError> {
        let mut query = entity::prelude::ComplianceDocument::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::compliance_document::Column::Status.eq(status.as_str()));
        }
        if let Some(contractor_id) = filter.contractor_id {
            query = query
                .filter(entity::compliance_document::Column::ContractorId.eq(contractor_id));
        }

        let paginator = query
            .order_by_desc(entity::compliance_document::Column::CreatedAt)
            .order_by_desc(entity::compliance_document::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let documents = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(ComplianceDocument::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((documents, total))
    }

    /// Gets every document held by the given contractors.
    pub async fn get_by_contractor_ids(
        &self,
        contractor_ids: &[i32],
    ) -> Result<Vec<ComplianceDocument>, AppError> {
        if contractor_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ComplianceDocument::find()
            .filter(
                entity::compliance_document::Column::ContractorId
                    .is_in(contractor_ids.iter().copied()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(ComplianceDocument::from_entity)
            .collect()
    }

    /// Most recently created document of a type for a contractor.
    pub async fn find_latest_of_type(
        &self,
        contractor_id: i32,
        document_type: &str,
    ) -> Result<Option<ComplianceDocument>, AppError> {
        entity::prelude::ComplianceDocument::find()
            .filter(entity::compliance_document::Column::ContractorId.eq(contractor_id))
            .filter(entity::compliance_document::Column::DocumentType.eq(document_type))
            .order_by_desc(entity::compliance_document::Column::CreatedAt)
            .order_by_desc(entity::compliance_document::Column::Id)
            .one(self.db)
            .await?
            .map(ComplianceDocument::from_entity)
            .transpose()
    }

    /// Applies a review decision.
    ///
    /// # Returns
    /// - `Ok(Some(document))` - The reviewed document
    /// - `Ok(None)` - No document with that ID
    pub async fn review(
        &self,
        params: &ReviewDocumentParams,
        now: DateTime<Utc>,
    ) -> Result<Option<ComplianceDocument>, AppError> {
        let Some(existing) = entity::prelude::ComplianceDocument::find_by_id(params.document_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let status = params.resulting_status();
        let mut document: entity::compliance_document::ActiveModel = existing.into();
        document.status = ActiveValue::Set(status.as_str().to_string());
        document.reviewed_by = ActiveValue::Set(Some(params.reviewer_id));
        document.reviewed_at = ActiveValue::Set(Some(now));
        document.review_notes = ActiveValue::Set(params.notes.clone());
        if status == DocumentStatus::Verified {
            document.verified_at = ActiveValue::Set(Some(now));
        }

        let updated = document.update(self.db).await?;

        ComplianceDocument::from_entity(updated).map(Some)
    }

    /// Marks a document verified against the Gas Safe register.
    ///
    /// Sets the verification score to `VERIFIED_SCORE` and the reference to the licence
    /// number.
    pub async fn mark_verified(
        &self,
        id: i32,
        licence_number: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ComplianceDocument>, AppError> {
        let Some(existing) = entity::prelude::ComplianceDocument::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut document: entity::compliance_document::ActiveModel = existing.into();
        document.status = ActiveValue::Set(DocumentStatus::Verified.as_str().to_string());
        document.verification_score = ActiveValue::Set(Some(VERIFIED_SCORE));
        document.verified_at = ActiveValue::Set(Some(now));
        document.reference = ActiveValue::Set(Some(licence_number.to_string()));

        let updated = document.update(self.db).await?;

        ComplianceDocument::from_entity(updated).map(Some)
    }

    /// Marks pending and verified documents whose expiry is at or before `now` as expired.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of documents that were expired
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::ComplianceDocument::update_many()
            .col_expr(
                entity::compliance_document::Column::Status,
                Expr::value(DocumentStatus::Expired.as_str()),
            )
            .filter(entity::compliance_document::Column::ExpiresAt.lte(now))
            .filter(entity::compliance_document::Column::Status.is_in([
                DocumentStatus::Pending.as_str(),
                DocumentStatus::Verified.as_str(),
            ]))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_by_status(&self, status: DocumentStatus) -> Result<u64, AppError> {
        let count = entity::prelude::ComplianceDocument::find()
            .filter(entity::compliance_document::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets non-expired documents expiring after `now` and no later than `until`, soonest
    /// first, with their contractor's name.
    pub async fn get_expiring_between(
        &self,
        now: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<ExpiringDocument>, AppError> {
        let rows = entity::prelude::ComplianceDocument::find()
            .find_also_related(entity::prelude::Contractor)
            .filter(entity::compliance_document::Column::ExpiresAt.gt(now))
            .filter(entity::compliance_document::Column::ExpiresAt.lte(until))
            .filter(
                entity::compliance_document::Column::Status.ne(DocumentStatus::Expired.as_str()),
            )
            .order_by_asc(entity::compliance_document::Column::ExpiresAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(document, contractor)| {
                document.expires_at.map(|expires_at| ExpiringDocument {
                    document_id: document.id,
                    contractor_id: document.contractor_id,
                    contractor_name: contractor.map(|c| c.name),
                    document_type: document.document_type,
                    expires_at,
                })
            })
            .collect())
    }
}
