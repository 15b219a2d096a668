//! User profile factory for creating signed-in test users.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let finance = UserProfileFactory::new(&db)
///     .name("Finance User")
///     .role("finance")
///     .build()
///     .await?;
/// ```
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    subject: String,
    email: String,
    name: String,
    role: String,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new factory with defaults.
    ///
    /// Defaults:
    /// - subject: `"subject-{id}"`
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"viewer"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            subject: format!("subject-{}", id),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            role: "viewer".to_string(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role column (`admin`, `finance`, `reviewer` or `viewer`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user profile.
    ///
    /// # Returns
    /// - `Ok(entity::user_profile::Model)` - Created user profile
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            id: ActiveValue::NotSet,
            subject: ActiveValue::Set(self.subject),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `viewer` user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db).build().await
}

/// Creates an `admin` user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db).role("admin").build().await
}
