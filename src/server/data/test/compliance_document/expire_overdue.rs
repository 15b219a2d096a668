use super::*;

/// Tests that only pending or verified documents past expiry are expired.
///
/// Expected: Ok(2); the rejected and the still-valid documents are untouched
#[tokio::test]
async fn expires_overdue_documents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contractor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    let overdue_verified =
        factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
            .status("verified")
            .expires_in_days(-1)
            .build()
            .await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .expires_in_days(-10)
        .build()
        .await?;
    let rejected = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .status("rejected")
        .expires_in_days(-3)
        .build()
        .await?;
    let valid = factory::create_verified_document(db, contractor.id, "gas_safe").await?;

    let repo = ComplianceDocumentRepository::new(db);
    let expired = repo.expire_overdue(Utc::now()).await?;

    assert_eq!(expired, 2);
    let status_of = |document: Option<ComplianceDocument>| {
        document.map(|doc| doc.status)
    };
    assert_eq!(
        status_of(repo.find_by_id(overdue_verified.id).await?),
        Some(DocumentStatus::Expired)
    );
    assert_eq!(
        status_of(repo.find_by_id(rejected.id).await?),
        Some(DocumentStatus::Rejected)
    );
    assert_eq!(
        status_of(repo.find_by_id(valid.id).await?),
        Some(DocumentStatus::Verified)
    );

    Ok(())
}
