//! Contractor factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contractors.
///
/// Defaults to an `active` contractor named `"Contractor {id}"` with no Gas Safe number.
pub struct ContractorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    gas_safe_number: Option<String>,
    status: String,
}

impl<'a> ContractorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Contractor {}", id),
            email: format!("contractor{}@example.com", id),
            gas_safe_number: None,
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gas_safe_number(mut self, gas_safe_number: impl Into<String>) -> Self {
        self.gas_safe_number = Some(gas_safe_number.into());
        self
    }

    /// Sets the contractor status (`active` or `suspended`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::contractor::Model, DbErr> {
        entity::contractor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            gas_safe_number: ActiveValue::Set(self.gas_safe_number),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active contractor with default values.
pub async fn create_contractor(
    db: &DatabaseConnection,
) -> Result<entity::contractor::Model, DbErr> {
    ContractorFactory::new(db).build().await
}
