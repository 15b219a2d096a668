use super::*;

/// Tests listing blocked invoices with their contractor.
///
/// Expected: Ok with only the blocked invoice, carrying the contractor name and reason
#[tokio::test]
async fn returns_blocked_invoices_with_contractor_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::contractor::ContractorFactory::new(db)
        .name("Boiler Bros")
        .build()
        .await?;
    let blocked = factory::invoice::InvoiceFactory::new(db, contractor.id)
        .status("blocked")
        .payment_block_reason("Contractor is not active")
        .build()
        .await?;
    factory::create_invoice(db, contractor.id).await?;

    let repo = InvoiceRepository::new(db);
    let blocks = repo.get_blocked().await?;

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].invoice.id, blocked.id);
    assert_eq!(blocks[0].contractor_name.as_deref(), Some("Boiler Bros"));
    assert_eq!(
        blocks[0].invoice.payment_block_reason.as_deref(),
        Some("Contractor is not active")
    );
    assert_eq!(repo.count_by_status(InvoiceStatus::Pending).await?, 1);

    Ok(())
}

/// Tests filtering the invoice list by status.
///
/// Expected: Ok with the two pending invoices only
#[tokio::test]
async fn paginates_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contractor = factory::create_contractor(db).await?;
    factory::create_invoice(db, contractor.id).await?;
    factory::create_invoice(db, contractor.id).await?;
    factory::invoice::InvoiceFactory::new(db, contractor.id)
        .status("approved")
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    let (pending, total_pending) = repo
        .get_paginated(Some(InvoiceStatus::Pending), 0, 10)
        .await?;
    let (_, total_all) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(total_pending, 2);
    assert!(pending.iter().all(|i| i.status == InvoiceStatus::Pending));
    assert_eq!(total_all, 3);

    Ok(())
}
