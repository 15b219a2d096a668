use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::gas_safe::CreateVerificationLogParams;

/// Verification type recorded for Gas Safe register checks.
pub const GAS_SAFE_VERIFICATION: &str = "gas_safe";

/// Append-only audit trail of verification attempts.
pub struct VerificationLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VerificationLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateVerificationLogParams,
    ) -> Result<entity::verification_log::Model, DbErr> {
        entity::verification_log::ActiveModel {
            contractor_id: ActiveValue::Set(params.contractor_id),
            compliance_document_id: ActiveValue::Set(params.compliance_document_id),
            verification_type: ActiveValue::Set(GAS_SAFE_VERIFICATION.to_string()),
            licence_number: ActiveValue::Set(params.licence_number),
            success: ActiveValue::Set(params.success),
            detail: ActiveValue::Set(params.detail),
            performed_by: ActiveValue::Set(params.performed_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
