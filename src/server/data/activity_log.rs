use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::activity::{Activity, CreateActivityParams};

/// Append-only feed behind the recent-activity widget.
pub struct ActivityLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, DbErr> {
        let entity = entity::activity_log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            action: ActiveValue::Set(params.action),
            entity_type: ActiveValue::Set(params.entity_type),
            entity_id: ActiveValue::Set(params.entity_id),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    /// Gets the newest `limit` rows, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Activity>, DbErr> {
        let entities = entity::prelude::ActivityLog::find()
            .order_by_desc(entity::activity_log::Column::CreatedAt)
            .order_by_desc(entity::activity_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }
}
