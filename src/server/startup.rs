use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const SESSION_INACTIVITY_DAYS: i64 = 7;
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after 7 days of inactivity. The cookie is only marked secure when
/// the dashboard is served over HTTPS.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(session)
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled and every request times out after 10 seconds.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.idp_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.idp_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.idp_auth_url.clone())
                .map_err(|e| invalid_url("IDP_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.idp_token_url.clone())
                .map_err(|e| invalid_url("IDP_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.idp_redirect_url.clone())
                .map_err(|e| invalid_url("IDP_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Allows credentialed requests from the dashboard origin only.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidValue {
            name: "APP_URL".to_string(),
            reason: "not a valid origin".to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Warns when nobody can administer users.
///
/// Without an admin and without `BOOTSTRAP_ADMIN_EMAIL` every new login is a viewer and
/// no one can assign roles.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    match &config.bootstrap_admin_email {
        Some(email) => tracing::info!("No admin yet; {} will be granted admin on login", email),
        None => tracing::warn!(
            "No admin user exists and BOOTSTRAP_ADMIN_EMAIL is not set; roles cannot be assigned"
        ),
    }

    Ok(())
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
