//! Gas Safe licence verification.
//!
//! Lookups go through a 24-hour cache keyed by normalized licence number. A fresh cached
//! record is returned as-is without contacting the register; otherwise the register is
//! queried and the result replaces the cached row. Licence numbers are validated before
//! either the cache or the register is touched.

pub mod client;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        activity_log::ActivityLogRepository, compliance_document::ComplianceDocumentRepository,
        contractor::ContractorRepository, gas_safe_cache::GasSafeCacheRepository,
        verification_log::VerificationLogRepository,
    },
    error::AppError,
    model::{
        activity::CreateActivityParams,
        compliance::GAS_SAFE_DOCUMENT_TYPE,
        gas_safe::{
            freshness_cutoff, normalize_licence, ContractorVerification,
            CreateVerificationLogParams, GasSafeLookupResult, VerifyContractorParams,
        },
    },
    service::gas_safe::client::GasSafeLookup,
};

pub struct GasSafeService<'a> {
    db: &'a DatabaseConnection,
    register: &'a dyn GasSafeLookup,
}

impl<'a> GasSafeService<'a> {
    pub fn new(db: &'a DatabaseConnection, register: &'a dyn GasSafeLookup) -> Self {
        Self { db, register }
    }

    /// Looks up a licence, serving fresh cached records without calling the register.
    ///
    /// # Returns
    /// - `Ok(GasSafeLookupResult)` - The record and whether it came from the cache
    /// - `Err(GasSafeError::InvalidLicence)` - Not 7 digits after normalization
    /// - `Err(GasSafeError::Upstream | Request)` - The register could not be queried
    pub async fn lookup(&self, licence_number: &str) -> Result<GasSafeLookupResult, AppError> {
        let licence_number = normalize_licence(licence_number)?;

        self.lookup_normalized(licence_number).await
    }

    async fn lookup_normalized(
        &self,
        licence_number: String,
    ) -> Result<GasSafeLookupResult, AppError> {
        let now = Utc::now();
        let cache = GasSafeCacheRepository::new(self.db);

        if let Some(record) = cache
            .find_fresh(&licence_number, freshness_cutoff(now))
            .await?
        {
            tracing::debug!("Gas Safe cache hit for licence {}", licence_number);
            return Ok(GasSafeLookupResult {
                record,
                cached: true,
            });
        }

        let entry = self.register.fetch(&licence_number).await?;
        let record = cache.upsert(entry.into_record(licence_number, now)).await?;

        Ok(GasSafeLookupResult {
            record,
            cached: false,
        })
    }

    /// Verifies a licence for a contractor and links the result to their Gas Safe document.
    ///
    /// The document is `params.document_id` when given, otherwise the contractor's most
    /// recent `gas_safe` document. On a valid registration the document is marked verified
    /// and the contractor's licence number is recorded. Every attempt that reaches the
    /// lookup is written to the verification log, failures included. The writes that
    /// follow a successful lookup share one transaction.
    ///
    /// # Returns
    /// - `Ok(ContractorVerification)` - Lookup result and the linked document
    /// - `Err(GasSafeError::InvalidLicence)` - Licence rejected before any lookup
    /// - `Err(AppError::NotFound)` - Unknown contractor, or the document is not theirs
    /// - `Err(AppError::BadRequest)` - The document is not a Gas Safe document
    pub async fn verify_for_contractor(
        &self,
        params: VerifyContractorParams,
    ) -> Result<ContractorVerification, AppError> {
        let licence_number = normalize_licence(&params.licence_number)?;

        let contractor_repo = ContractorRepository::new(self.db);
        let document_repo = ComplianceDocumentRepository::new(self.db);

        if contractor_repo.find_by_id(params.contractor_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Contractor {} not found",
                params.contractor_id
            )));
        }

        let document = match params.document_id {
            Some(document_id) => match document_repo.find_by_id(document_id).await? {
                Some(document) if document.contractor_id == params.contractor_id => {
                    if document.document_type != GAS_SAFE_DOCUMENT_TYPE {
                        return Err(AppError::BadRequest(format!(
                            "Compliance document {} is a {} document, not {}",
                            document_id, document.document_type, GAS_SAFE_DOCUMENT_TYPE
                        )));
                    }
                    Some(document)
                }
                _ => {
                    return Err(AppError::NotFound(format!(
                        "Compliance document {} not found for contractor {}",
                        document_id, params.contractor_id
                    )))
                }
            },
            None => {
                document_repo
                    .find_latest_of_type(params.contractor_id, GAS_SAFE_DOCUMENT_TYPE)
                    .await?
            }
        };

        let document_id = document.as_ref().map(|d| d.id);
        let lookup = match self.lookup_normalized(licence_number.clone()).await {
            Ok(lookup) => lookup,
            Err(err) => {
                self.log_failure(
                    &params,
                    document_id,
                    &licence_number,
                    format!("Lookup failed: {}", err),
                )
                .await?;

                return Err(err);
            }
        };

        let is_valid = lookup.record.is_valid;
        let txn = self.db.begin().await?;

        let recorded = async {
            let document = match document {
                Some(document) if is_valid => {
                    ComplianceDocumentRepository::new(&txn)
                        .mark_verified(document.id, &licence_number, Utc::now())
                        .await?
                }
                other => other,
            };

            if is_valid {
                ContractorRepository::new(&txn)
                    .set_gas_safe_number(params.contractor_id, &licence_number)
                    .await?;

                ActivityLogRepository::new(&txn)
                    .create(CreateActivityParams::new(
                        Some(params.performed_by),
                        "gas_safe_verified",
                        "contractor",
                        Some(params.contractor_id),
                        format!(
                            "Gas Safe licence {} verified for contractor {}",
                            licence_number, params.contractor_id
                        ),
                    ))
                    .await?;
            }

            VerificationLogRepository::new(&txn)
                .create(CreateVerificationLogParams {
                    contractor_id: Some(params.contractor_id),
                    compliance_document_id: document.as_ref().map(|d| d.id),
                    licence_number: licence_number.clone(),
                    success: is_valid,
                    detail: format!(
                        "Registration status: {}",
                        lookup.record.registration_status
                    ),
                    performed_by: params.performed_by,
                })
                .await?;

            Ok::<_, AppError>(document)
        }
        .await;

        let document = match recorded {
            Ok(document) => {
                txn.commit().await?;
                document
            }
            Err(err) => {
                txn.rollback().await?;
                tracing::error!(
                    "Recording Gas Safe verification for contractor {} failed: {}",
                    params.contractor_id,
                    err
                );
                self.log_failure(
                    &params,
                    document_id,
                    &licence_number,
                    format!("Recording failed: {}", err),
                )
                .await?;

                return Err(err);
            }
        };

        tracing::info!(
            "Gas Safe verification of licence {} for contractor {} by user {}: {}",
            licence_number,
            params.contractor_id,
            params.performed_by,
            if is_valid { "valid" } else { "not valid" }
        );

        Ok(ContractorVerification {
            contractor_id: params.contractor_id,
            lookup,
            document,
        })
    }

    /// Appends an unsuccessful verification log row outside any transaction.
    async fn log_failure(
        &self,
        params: &VerifyContractorParams,
        document_id: Option<i32>,
        licence_number: &str,
        detail: String,
    ) -> Result<(), AppError> {
        VerificationLogRepository::new(self.db)
            .create(CreateVerificationLogParams {
                contractor_id: Some(params.contractor_id),
                compliance_document_id: document_id,
                licence_number: licence_number.to_string(),
                success: false,
                detail,
                performed_by: params.performed_by,
            })
            .await?;

        Ok(())
    }
}
