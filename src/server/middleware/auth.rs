use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Capability required by an endpoint.
///
/// Reads only need an authenticated user, so they pass an empty permission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// User administration. Admin only.
    Admin,
    /// Previewing and executing payment runs. Admin or finance.
    ManagePayments,
    /// Reviewing documents and running Gas Safe verification. Admin or reviewer.
    ReviewDocuments,
}

impl Permission {
    pub fn allows(&self, role: UserRole) -> bool {
        match self {
            Self::Admin => role == UserRole::Admin,
            Self::ManagePayments => matches!(role, UserRole::Admin | UserRole::Finance),
            Self::ReviewDocuments => matches!(role, UserRole::Admin | UserRole::Reviewer),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Admin => "admin access",
            Self::ManagePayments => "payment access",
            Self::ReviewDocuments => "document review access",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission against their role.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user in session (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccessDenied)` - Role lacks a permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(missing) = permissions.iter().find(|p| !p.allows(user.role)) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "{} role does not have {}",
                    user.role.as_str(),
                    missing.description()
                ),
            )
            .into());
        }

        Ok(user)
    }
}
