//! Cache of Gas Safe register lookups keyed by normalized licence number.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::gas_safe::GasSafeRecord;

pub struct GasSafeCacheRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GasSafeCacheRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the cached record for a licence if it was fetched after `cutoff`.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - Fresh cached record
    /// - `Ok(None)` - No record, or the record is older than `cutoff`
    pub async fn find_fresh(
        &self,
        licence_number: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Option<GasSafeRecord>, DbErr> {
        let entity = entity::prelude::GasSafeCache::find_by_id(licence_number.to_string())
            .filter(entity::gas_safe_cache::Column::FetchedAt.gt(cutoff))
            .one(self.db)
            .await?;

        Ok(entity.map(GasSafeRecord::from_entity))
    }

    /// Inserts or replaces the cached record for its licence number.
    ///
    /// Concurrent writers for the same licence resolve last-write-wins.
    pub async fn upsert(&self, record: GasSafeRecord) -> Result<GasSafeRecord, DbErr> {
        let entity = entity::prelude::GasSafeCache::insert(entity::gas_safe_cache::ActiveModel {
            licence_number: ActiveValue::Set(record.licence_number),
            engineer_name: ActiveValue::Set(record.engineer_name),
            business_name: ActiveValue::Set(record.business_name),
            registration_status: ActiveValue::Set(record.registration_status),
            is_valid: ActiveValue::Set(record.is_valid),
            registration_expires_at: ActiveValue::Set(record.registration_expires_at),
            fetched_at: ActiveValue::Set(record.fetched_at),
        })
        .on_conflict(
            OnConflict::column(entity::gas_safe_cache::Column::LicenceNumber)
                .update_columns([
                    entity::gas_safe_cache::Column::EngineerName,
                    entity::gas_safe_cache::Column::BusinessName,
                    entity::gas_safe_cache::Column::RegistrationStatus,
                    entity::gas_safe_cache::Column::IsValid,
                    entity::gas_safe_cache::Column::RegistrationExpiresAt,
                    entity::gas_safe_cache::Column::FetchedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(GasSafeRecord::from_entity(entity))
    }

    /// Deletes records fetched at or before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of deleted records
    pub async fn delete_stale(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::GasSafeCache::delete_many()
            .filter(entity::gas_safe_cache::Column::FetchedAt.lte(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
