//! Activity feed models for the recent-activity dashboard widget.

use chrono::{DateTime, Utc};

use crate::model::dashboard::ActivityDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn from_entity(entity: entity::activity_log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            action: entity.action,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            user_id: self.user_id,
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending an activity row.
///
/// `user_id` is `None` for actions performed by the scheduler.
#[derive(Debug, Clone)]
pub struct CreateActivityParams {
    pub user_id: Option<i32>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub description: String,
}

impl CreateActivityParams {
    pub fn new(
        user_id: Option<i32>,
        action: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: Option<i32>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            action: action.into(),
            entity_type: entity_type.into(),
            entity_id,
            description: description.into(),
        }
    }
}
