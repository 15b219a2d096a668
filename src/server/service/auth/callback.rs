use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{UpsertUserParams, User},
        service::auth::AuthService,
    },
};

/// Subset of the OpenID Connect userinfo response used to build a profile.
#[derive(Deserialize, Debug)]
struct UserInfo {
    sub: String,
    email: Option<String>,
    name: Option<String>,
}

impl<'a> AuthService<'a> {
    /// Completes the login after the provider redirects back.
    ///
    /// Exchanges the authorization code, fetches userinfo and upserts the profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in profile
    /// - `Err(AuthError::TokenExchange)` - The provider rejected the code
    /// - `Err(AuthError::InvalidUserInfo)` - Userinfo lacks an email address
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self.fetch_user_info(token.access_token().secret()).await?;

        let Some(email) = user_info.email else {
            return Err(AuthError::InvalidUserInfo(format!(
                "no email for subject {}",
                user_info.sub
            ))
            .into());
        };

        let role = self
            .bootstrap_admin_email
            .filter(|admin| admin.eq_ignore_ascii_case(&email))
            .map(|_| UserRole::Admin);

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParams {
                subject: user_info.sub,
                name: user_info.name.unwrap_or_else(|| email.clone()),
                email,
                role,
            })
            .await?;

        tracing::info!(
            "User {} ({}) logged in as {}",
            user.id,
            user.email,
            user.role.as_str()
        );

        Ok(user)
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, AppError> {
        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}
