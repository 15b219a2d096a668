use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: String,
    pub log_level: String,

    pub idp_client_id: String,
    pub idp_client_secret: String,
    pub idp_redirect_url: String,
    pub idp_auth_url: String,
    pub idp_token_url: String,
    pub idp_userinfo_url: String,

    /// Email that is granted the `admin` role on login.
    pub bootstrap_admin_email: Option<String>,

    pub gas_safe_api_url: String,
    pub gas_safe_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: required("APP_URL")?,
            log_level: optional("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            idp_client_id: required("IDP_CLIENT_ID")?,
            idp_client_secret: required("IDP_CLIENT_SECRET")?,
            idp_redirect_url: required("IDP_REDIRECT_URL")?,
            idp_auth_url: required("IDP_AUTH_URL")?,
            idp_token_url: required("IDP_TOKEN_URL")?,
            idp_userinfo_url: required("IDP_USERINFO_URL")?,
            bootstrap_admin_email: optional("BOOTSTRAP_ADMIN_EMAIL"),
            gas_safe_api_url: required("GAS_SAFE_API_URL")?,
            gas_safe_api_key: required("GAS_SAFE_API_KEY")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
