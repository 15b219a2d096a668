//! User profile repository.
//!
//! Profiles are keyed by the identity provider's subject and created or refreshed on every
//! login. Roles are only changed through `set_role` or by an explicit role on upsert.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::{
        error::AppError,
        model::user::{UpsertUserParams, User},
    },
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a profile or refreshes an existing one by subject.
    ///
    /// Email, name and `last_login_at` are always refreshed. The role is written for new
    /// profiles (defaulting to `viewer`) and only overwritten on conflict when
    /// `params.role` is `Some`, so a regular login never demotes anyone.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated profile
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let now = Utc::now();

        let mut update_columns = vec![
            entity::user_profile::Column::Email,
            entity::user_profile::Column::Name,
            entity::user_profile::Column::LastLoginAt,
        ];
        if params.role.is_some() {
            update_columns.push(entity::user_profile::Column::Role);
        }

        let role = params.role.unwrap_or(UserRole::Viewer);

        let entity = entity::prelude::UserProfile::insert(entity::user_profile::ActiveModel {
            subject: ActiveValue::Set(params.subject),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_profile::Column::Subject)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::UserProfile::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Whether any profile currently holds the `admin` role.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let count = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of users ordered by name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the requested page and the total number of users
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::UserProfile::find()
            .order_by_asc(entity::user_profile::Column::Name)
            .order_by_asc(entity::user_profile::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user with that ID
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<bool, AppError> {
        let result = entity::prelude::UserProfile::update_many()
            .col_expr(entity::user_profile::Column::Role, Expr::value(role.as_str()))
            .filter(entity::user_profile::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
