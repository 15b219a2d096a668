use super::*;

/// Tests approving a pending invoice.
///
/// Expected: Ok(true), status `approved` and a compliance check timestamp
#[tokio::test]
async fn approves_pending_invoice() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    let invoice = factory::create_invoice(db, contractor.id).await?;

    let repo = InvoiceRepository::new(db);
    let applied = repo.mark_approved(invoice.id, Utc::now()).await?;

    assert!(applied);
    let stored = repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(stored.status, InvoiceStatus::Approved);
    assert!(stored.payment_block_reason.is_none());
    assert!(stored.compliance_check_at.is_some());

    Ok(())
}

/// Tests blocking a pending invoice records the reason.
///
/// Expected: Ok(true), status `blocked` with the reason stored
#[tokio::test]
async fn blocks_pending_invoice_with_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    let invoice = factory::create_invoice(db, contractor.id).await?;

    let repo = InvoiceRepository::new(db);
    let applied = repo
        .mark_blocked(invoice.id, "Missing Gas Safe certificate", Utc::now())
        .await?;

    assert!(applied);
    let stored = repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(stored.status, InvoiceStatus::Blocked);
    assert_eq!(
        stored.payment_block_reason.as_deref(),
        Some("Missing Gas Safe certificate")
    );

    Ok(())
}

/// Tests that an invoice which is no longer pending is left alone.
///
/// Expected: Ok(false) and the invoice stays `approved`
#[tokio::test]
async fn skips_invoice_that_is_not_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, contractor.id)
        .status("approved")
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    let applied = repo.mark_blocked(invoice.id, "late", Utc::now()).await?;

    assert!(!applied);
    let stored = repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(stored.status, InvoiceStatus::Approved);
    assert!(stored.payment_block_reason.is_none());

    Ok(())
}
