use super::*;

/// Tests filtering documents by status and contractor.
///
/// Expected: Ok with only the pending document of the first contractor
#[tokio::test]
async fn filters_by_status_and_contractor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contractor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_contractor(db).await?;
    let second = factory::create_contractor(db).await?;
    let pending = factory::compliance_document::ComplianceDocumentFactory::new(db, first.id)
        .build()
        .await?;
    factory::create_verified_document(db, first.id, "public_liability").await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, second.id)
        .build()
        .await?;

    let filter = DocumentFilter {
        status: Some(DocumentStatus::Pending),
        contractor_id: Some(first.id),
    };
    let (documents, total) = ComplianceDocumentRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, pending.id);
    assert_eq!(documents[0].status, DocumentStatus::Pending);

    Ok(())
}

/// Tests listing without filters returns newest documents first.
///
/// Expected: Ok with the newer document on the first page
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contractor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .build()
        .await?;

    let (documents, total) = ComplianceDocumentRepository::new(db)
        .get_paginated(&DocumentFilter::default(), 0, 1)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(documents[0].id, newer.id);

    Ok(())
}
