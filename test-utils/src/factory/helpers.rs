//! Shared helpers for factory methods.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    compliance_document::ComplianceDocumentFactory, contractor::create_contractor,
};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active contractor that passes every payment-block rule.
///
/// The contractor receives a verified `gas_safe` and a verified `public_liability`
/// document, both expiring a year from now.
///
/// # Returns
/// - `Ok(entity::contractor::Model)` - The compliant contractor
/// - `Err(DbErr)` - Database error during creation
pub async fn create_compliant_contractor(
    db: &DatabaseConnection,
) -> Result<entity::contractor::Model, DbErr> {
    let contractor = create_contractor(db).await?;
    let expires_at = Utc::now() + Duration::days(365);

    for document_type in ["gas_safe", "public_liability"] {
        ComplianceDocumentFactory::new(db, contractor.id)
            .document_type(document_type)
            .status("verified")
            .expires_at(Some(expires_at))
            .build()
            .await?;
    }

    Ok(contractor)
}
