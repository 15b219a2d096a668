//! Gas Safe register client.
//!
//! `GasSafeLookup` is the seam between the verification service and the register, so the
//! service can run against a stub in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::server::{error::gas_safe::GasSafeError, model::gas_safe::RegisterEntry};

#[async_trait]
pub trait GasSafeLookup: Send + Sync {
    /// Fetches the register entry for a normalized licence number.
    ///
    /// A licence the register does not know is returned as `RegisterEntry::not_found()`,
    /// not as an error.
    async fn fetch(&self, licence_number: &str) -> Result<RegisterEntry, GasSafeError>;
}

#[derive(Deserialize, Debug)]
struct RegisterResponse {
    engineer_name: Option<String>,
    business_name: Option<String>,
    registration_status: String,
    registration_expires_at: Option<DateTime<Utc>>,
}

/// HTTP client for the register API, authenticated with an `x-api-key` header.
pub struct GasSafeApiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GasSafeApiClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl GasSafeLookup for GasSafeApiClient {
    async fn fetch(&self, licence_number: &str) -> Result<RegisterEntry, GasSafeError> {
        let response = self
            .http_client
            .get(format!("{}/engineers/{}", self.base_url, licence_number))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Licence {} not on the Gas Safe register", licence_number);
            return Ok(RegisterEntry::not_found());
        }
        if !status.is_success() {
            return Err(GasSafeError::Upstream {
                licence_number: licence_number.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.json::<RegisterResponse>().await?;

        Ok(RegisterEntry {
            engineer_name: body.engineer_name,
            business_name: body.business_name,
            registration_status: body.registration_status,
            registration_expires_at: body.registration_expires_at,
        })
    }
}
