//! Application state shared across all request handlers.
//!
//! Initialized once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection and reqwest client
//! are pools, the register client sits behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::gas_safe::client::GasSafeLookup;

/// OAuth2 client with the authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Shared HTTP client with redirects disabled, used for the identity provider.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Gas Safe register client.
    pub gas_safe: Arc<dyn GasSafeLookup>,

    /// Identity provider endpoint returning `sub`, `email` and `name`.
    pub idp_userinfo_url: String,

    /// Email promoted to `admin` when it signs in.
    pub bootstrap_admin_email: Option<String>,

    /// Dashboard URL; login and logout redirect here.
    pub app_url: String,
}
