use super::*;

/// Tests approving a pending document.
///
/// Expected: Ok with status `verified` and reviewer details recorded
#[tokio::test]
async fn approves_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewer = factory::create_admin(db).await?;
    let contractor = factory::create_contractor(db).await?;
    let document = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .build()
        .await?;

    let reviewed = ComplianceDocumentRepository::new(db)
        .review(
            &ReviewDocumentParams {
                document_id: document.id,
                decision: ReviewDecision::Approve,
                notes: Some("Checked certificate".to_string()),
                reviewer_id: reviewer.id,
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(reviewed.status, DocumentStatus::Verified);
    assert_eq!(reviewed.reviewed_by, Some(reviewer.id));
    assert_eq!(reviewed.review_notes.as_deref(), Some("Checked certificate"));
    assert!(reviewed.reviewed_at.is_some());
    assert!(reviewed.verified_at.is_some());

    Ok(())
}

/// Tests rejecting a document leaves it unverified.
///
/// Expected: Ok with status `rejected` and no verified timestamp
#[tokio::test]
async fn rejects_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewer = factory::create_admin(db).await?;
    let contractor = factory::create_contractor(db).await?;
    let document = factory::compliance_document::ComplianceDocumentFactory::new(db, contractor.id)
        .build()
        .await?;

    let reviewed = ComplianceDocumentRepository::new(db)
        .review(
            &ReviewDocumentParams {
                document_id: document.id,
                decision: ReviewDecision::Reject,
                notes: None,
                reviewer_id: reviewer.id,
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(reviewed.status, DocumentStatus::Rejected);
    assert!(reviewed.verified_at.is_none());

    Ok(())
}

/// Tests reviewing a document that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contractor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ComplianceDocumentRepository::new(db)
        .review(
            &ReviewDocumentParams {
                document_id: 42,
                decision: ReviewDecision::Approve,
                notes: None,
                reviewer_id: 1,
            },
            Utc::now(),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
