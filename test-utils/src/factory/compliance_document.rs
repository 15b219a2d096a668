//! Compliance document factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating compliance documents for a contractor.
///
/// Defaults to a `pending` `gas_safe` document without reference, score or expiry.
pub struct ComplianceDocumentFactory<'a> {
    db: &'a DatabaseConnection,
    contractor_id: i32,
    document_type: String,
    reference: Option<String>,
    status: String,
    verification_score: Option<i32>,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> ComplianceDocumentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, contractor_id: i32) -> Self {
        Self {
            db,
            contractor_id,
            document_type: "gas_safe".to_string(),
            reference: None,
            status: "pending".to_string(),
            verification_score: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the status (`pending`, `verified`, `rejected` or `expired`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn verification_score(mut self, score: i32) -> Self {
        self.verification_score = Some(score);
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Shorthand for an expiry `days` from now (negative for the past).
    pub fn expires_in_days(self, days: i64) -> Self {
        self.expires_at(Some(Utc::now() + Duration::days(days)))
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::compliance_document::Model, DbErr> {
        entity::compliance_document::ActiveModel {
            id: ActiveValue::NotSet,
            contractor_id: ActiveValue::Set(self.contractor_id),
            document_type: ActiveValue::Set(self.document_type),
            reference: ActiveValue::Set(self.reference),
            status: ActiveValue::Set(self.status),
            verification_score: ActiveValue::Set(self.verification_score),
            expires_at: ActiveValue::Set(self.expires_at),
            verified_at: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified document of the given type expiring a year from now.
pub async fn create_verified_document(
    db: &DatabaseConnection,
    contractor_id: i32,
    document_type: &str,
) -> Result<entity::compliance_document::Model, DbErr> {
    ComplianceDocumentFactory::new(db, contractor_id)
        .document_type(document_type)
        .status("verified")
        .expires_in_days(365)
        .build()
        .await
}
