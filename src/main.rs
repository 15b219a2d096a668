mod model;
mod server;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::compliance_expiry,
    service::gas_safe::client::GasSafeApiClient, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cors = startup::setup_cors(&config)?;

    startup::check_for_admin(&db, &config).await?;

    let gas_safe = GasSafeApiClient::new(
        http_client.clone(),
        &config.gas_safe_api_url,
        config.gas_safe_api_key.clone(),
    );

    let _scheduler = compliance_expiry::start_scheduler(db.clone()).await?;

    let app = router::router()
        .with_state(AppState {
            db,
            http_client,
            oauth_client,
            gas_safe: Arc::new(gas_safe),
            idp_userinfo_url: config.idp_userinfo_url.clone(),
            bootstrap_admin_email: config.bootstrap_admin_email.clone(),
            app_url: config.app_url.clone(),
        })
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
