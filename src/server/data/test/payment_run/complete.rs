use super::*;

/// Tests the create, add item and complete sequence.
///
/// Expected: Ok with a completed run carrying the totals and both items in order
#[tokio::test]
async fn completes_run_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;
    let contractor = factory::create_contractor(db).await?;
    let approved = factory::create_invoice(db, contractor.id).await?;
    let blocked = factory::create_invoice(db, contractor.id).await?;

    let repo = PaymentRunRepository::new(db);
    let run = repo.create(user.id, 2, Utc::now()).await?;
    assert_eq!(run.status, "in_progress");

    repo.add_item(CreatePaymentRunItemParams {
        payment_run_id: run.id,
        invoice_id: approved.id,
        amount_pence: 10_000,
        status: InvoiceStatus::Approved,
        block_reason: None,
    })
    .await?;
    repo.add_item(CreatePaymentRunItemParams {
        payment_run_id: run.id,
        invoice_id: blocked.id,
        amount_pence: 2_500,
        status: InvoiceStatus::Blocked,
        block_reason: Some("Contractor is not active".to_string()),
    })
    .await?;

    let completed = repo
        .complete(
            run.id,
            PaymentRunTotals {
                approved_count: 1,
                blocked_count: 1,
                approved_amount_pence: 10_000,
                blocked_amount_pence: 2_500,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(completed.status, "completed");
    assert_eq!(completed.total_invoices, 2);
    assert_eq!(completed.approved_amount_pence, 10_000);
    assert_eq!(completed.blocked_amount_pence, 2_500);
    assert!(completed.completed_at.is_some());

    let detail = repo.find_with_items(run.id).await?.unwrap();
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[0].invoice_id, approved.id);
    assert_eq!(detail.items[1].status, InvoiceStatus::Blocked);
    assert_eq!(
        detail.items[1].block_reason.as_deref(),
        Some("Contractor is not active")
    );

    Ok(())
}

/// Tests completing a run that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_run() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let totals = PaymentRunTotals {
        approved_count: 0,
        blocked_count: 0,
        approved_amount_pence: 0,
        blocked_amount_pence: 0,
    };
    let result = PaymentRunRepository::new(db)
        .complete(404, totals, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
