use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{PaginatedUsers, User},
        util::pagination::total_pages,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_role(
        &self,
        id: i32,
        role: UserRole,
        changed_by: i32,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.set_role(id, role).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!(
            "User {} set role of user {} to {}",
            changed_by,
            id,
            role.as_str()
        );

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
