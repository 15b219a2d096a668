//! OAuth2 authorization-code login against the configured identity provider.
//!
//! The provider only proves who the user is. Roles live on the local user profile and are
//! never taken from the provider, except for the configured bootstrap admin email which is
//! promoted to `admin` on login.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
    pub bootstrap_admin_email: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
        bootstrap_admin_email: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            bootstrap_admin_email,
        }
    }
}
