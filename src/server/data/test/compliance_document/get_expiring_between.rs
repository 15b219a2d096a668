use super::*;

/// Tests the expiring-documents window and ordering.
///
/// Expected: Ok with the 5-day then the 20-day document; documents outside the window,
/// already past expiry or marked expired are excluded
#[tokio::test]
async fn returns_documents_in_window_soonest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contractor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::contractor::ContractorFactory::new(db)
        .name("Acme Heating")
        .build()
        .await?;
    let later = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .status("verified")
        .expires_in_days(20)
        .build()
        .await?;
    let sooner = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .document_type("public_liability")
        .expires_in_days(5)
        .build()
        .await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .expires_in_days(45)
        .build()
        .await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .expires_in_days(-2)
        .build()
        .await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .status("expired")
        .expires_in_days(3)
        .build()
        .await?;

    let now = Utc::now();
    let documents = ComplianceDocumentRepository::new(db)
        .get_expiring_between(now, now + Duration::days(30))
        .await?;

    assert_eq!(
        documents.iter().map(|d| d.document_id).collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );
    assert_eq!(documents[0].contractor_name.as_deref(), Some("Acme Heating"));
    assert_eq!(documents[0].document_type, "public_liability");

    Ok(())
}
