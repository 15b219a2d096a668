//! Gas Safe cache entry factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for seeding the Gas Safe lookup cache.
///
/// Defaults to a valid, `registered` entry fetched now.
pub struct GasSafeCacheFactory<'a> {
    db: &'a DatabaseConnection,
    licence_number: String,
    engineer_name: Option<String>,
    business_name: Option<String>,
    registration_status: String,
    is_valid: bool,
    fetched_at: DateTime<Utc>,
}

impl<'a> GasSafeCacheFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, licence_number: impl Into<String>) -> Self {
        Self {
            db,
            licence_number: licence_number.into(),
            engineer_name: Some("Cached Engineer".to_string()),
            business_name: Some("Cached Heating Ltd".to_string()),
            registration_status: "registered".to_string(),
            is_valid: true,
            fetched_at: Utc::now(),
        }
    }

    pub fn engineer_name(mut self, engineer_name: impl Into<String>) -> Self {
        self.engineer_name = Some(engineer_name.into());
        self
    }

    pub fn registration_status(mut self, status: impl Into<String>) -> Self {
        self.registration_status = status.into();
        self
    }

    pub fn is_valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    pub fn fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    pub async fn build(self) -> Result<entity::gas_safe_cache::Model, DbErr> {
        entity::gas_safe_cache::ActiveModel {
            licence_number: ActiveValue::Set(self.licence_number),
            engineer_name: ActiveValue::Set(self.engineer_name),
            business_name: ActiveValue::Set(self.business_name),
            registration_status: ActiveValue::Set(self.registration_status),
            is_valid: ActiveValue::Set(self.is_valid),
            registration_expires_at: ActiveValue::Set(None),
            fetched_at: ActiveValue::Set(self.fetched_at),
        }
        .insert(self.db)
        .await
    }
}
