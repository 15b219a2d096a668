//! User domain models and parameters.
//!
//! Users are profiles created on first login through the identity provider. The `role`
//! column drives every authorization decision made by `AuthGuard`.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::user::{PaginatedUsersDto, UserDto, UserRole},
    server::error::AppError,
};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject identifier issued by the identity provider.
    pub subject: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            last_login_at: self.last_login_at,
        }
    }

    /// Converts an entity model into the domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted user
    /// - `Err(AppError::InternalError)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user_profile::Model) -> Result<Self, AppError> {
        let role = UserRole::from_str(&entity.role).map_err(AppError::InternalError)?;

        Ok(Self {
            id: entity.id,
            subject: entity.subject,
            email: entity.email,
            name: entity.name,
            role,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Parameters for upserting a user on login.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub subject: String,
    pub email: String,
    pub name: String,
    /// Role to force on the profile; `None` keeps the existing role (or `viewer` for a
    /// new profile).
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

