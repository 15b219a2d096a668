use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, TokenUrl};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    error::gas_safe::GasSafeError, model::gas_safe::RegisterEntry, router::router,
    service::gas_safe::client::GasSafeLookup, state::AppState,
};

mod unauthenticated;

/// Register stub that fails every lookup; requests reaching it are a test failure.
struct UnreachableRegister;

#[async_trait]
impl GasSafeLookup for UnreachableRegister {
    async fn fetch(&self, licence_number: &str) -> Result<RegisterEntry, GasSafeError> {
        Err(GasSafeError::Upstream {
            licence_number: licence_number.to_string(),
            status: 599,
        })
    }
}

async fn test_app(db: &DatabaseConnection) -> Router {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    let oauth_client = BasicClient::new(ClientId::new("test-client".to_string()))
        .set_auth_uri(AuthUrl::new("http://idp.test/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("http://idp.test/token".to_string()).unwrap());

    router()
        .with_state(AppState {
            db: db.clone(),
            http_client: reqwest::Client::new(),
            oauth_client,
            gas_safe: Arc::new(UnreachableRegister),
            idp_userinfo_url: "http://idp.test/userinfo".to_string(),
            bootstrap_admin_email: None,
            app_url: "http://localhost:8080".to_string(),
        })
        .layer(SessionManagerLayer::new(store))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
