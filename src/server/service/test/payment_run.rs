use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::collections::HashSet;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::payment_run::PaymentRunService};

/// Tests the preview classifies invoices without writing anything.
///
/// Expected: Ok with one approved and one blocked invoice, invoices still pending and no
/// run row created
#[tokio::test]
async fn preview_does_not_mutate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let compliant = factory::helpers::create_compliant_contractor(db).await?;
    let non_compliant = factory::create_contractor(db).await?;
    factory::create_invoice(db, compliant.id).await?;
    factory::create_invoice(db, non_compliant.id).await?;

    let plan = PaymentRunService::new(db).preview().await?;

    assert_eq!(plan.approved.len(), 1);
    assert_eq!(plan.blocked.len(), 1);
    assert_eq!(
        plan.blocked[0].block_reason.as_deref(),
        Some("Missing Gas Safe certificate")
    );

    let pending = entity::prelude::Invoice::find()
        .filter(entity::invoice::Column::Status.eq("pending"))
        .count(db)
        .await?;
    assert_eq!(pending, 2);
    assert_eq!(entity::prelude::PaymentRun::find().count(db).await?, 0);

    Ok(())
}

/// Tests executing a run applies the classification and records totals.
///
/// Expected: Ok with disjoint approved and blocked sets covering every pending invoice,
/// amounts summing to the processed total, and matching invoice rows
#[tokio::test]
async fn execute_applies_plan_and_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user_profile::UserProfileFactory::new(db)
        .role("finance")
        .build()
        .await?;
    let compliant = factory::helpers::create_compliant_contractor(db).await?;
    let suspended = factory::contractor::ContractorFactory::new(db)
        .status("suspended")
        .build()
        .await?;

    let mut pending_ids = HashSet::new();
    for (contractor_id, amount) in [
        (compliant.id, 15_000),
        (compliant.id, 2_550),
        (suspended.id, 7_000),
    ] {
        let invoice = factory::invoice::InvoiceFactory::new(db, contractor_id)
            .amount_pence(amount)
            .build()
            .await?;
        pending_ids.insert(invoice.id);
    }

    let outcome = PaymentRunService::new(db).execute(user.id).await?;

    let approved: HashSet<i32> = outcome.applied.approved.iter().map(|i| i.invoice_id).collect();
    let blocked: HashSet<i32> = outcome.applied.blocked.iter().map(|i| i.invoice_id).collect();
    assert!(approved.is_disjoint(&blocked));
    assert_eq!(&approved | &blocked, pending_ids);
    assert_eq!(outcome.applied.approved_amount(), 17_550);
    assert_eq!(outcome.applied.blocked_amount(), 7_000);

    let run_id = outcome.run_id.unwrap();
    let detail = PaymentRunService::new(db).get_by_id(run_id).await?;
    assert_eq!(detail.run.status, "completed");
    assert_eq!(detail.run.total_invoices, 3);
    assert_eq!(detail.run.approved_count, 2);
    assert_eq!(detail.run.blocked_count, 1);
    assert_eq!(
        detail.run.approved_amount_pence + detail.run.blocked_amount_pence,
        24_550
    );
    assert_eq!(detail.items.len(), 3);

    let blocked_invoice = entity::prelude::Invoice::find()
        .filter(entity::invoice::Column::Status.eq("blocked"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        blocked_invoice.payment_block_reason.as_deref(),
        Some("Contractor is not active")
    );
    assert!(blocked_invoice.compliance_check_at.is_some());

    let activity = entity::prelude::ActivityLog::find().count(db).await?;
    assert_eq!(activity, 1);

    Ok(())
}

/// Tests a run with nothing pending.
///
/// Expected: Ok with no run ID, zero counts and no run row
#[tokio::test]
async fn execute_without_pending_invoices_creates_no_run() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;

    let outcome = PaymentRunService::new(db).execute(user.id).await?;

    assert!(outcome.run_id.is_none());
    assert!(outcome.applied.is_empty());
    assert_eq!(entity::prelude::PaymentRun::find().count(db).await?, 0);

    Ok(())
}

/// Tests invoices processed by an earlier run are not processed again.
///
/// Expected: Ok; the second run finds nothing pending
#[tokio::test]
async fn second_run_skips_processed_invoices() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;
    let contractor = factory::create_contractor(db).await?;
    factory::create_invoice(db, contractor.id).await?;

    let service = PaymentRunService::new(db);
    let first = service.execute(user.id).await?;
    let second = service.execute(user.id).await?;

    assert_eq!(first.applied.blocked.len(), 1);
    assert_eq!(
        first.applied.blocked[0].block_reason.as_deref(),
        Some("Missing Gas Safe certificate")
    );
    assert!(second.run_id.is_none());

    let runs = service.get_paginated(0, 10).await?;
    assert_eq!(runs.total, 1);

    Ok(())
}

/// Tests a failure after invoices were updated rolls the whole run back.
///
/// The activity table is missing, so the run fails on its last write after every
/// invoice was marked and every item inserted.
///
/// Expected: Err, both invoices still pending, no run and no run items persisted
#[tokio::test]
async fn execute_rolls_back_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .with_contractor_tables()
        .with_table(entity::prelude::Invoice)
        .with_table(entity::prelude::PaymentRun)
        .with_table(entity::prelude::PaymentRunItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;
    let compliant = factory::helpers::create_compliant_contractor(db).await?;
    let non_compliant = factory::create_contractor(db).await?;
    factory::create_invoice(db, compliant.id).await?;
    factory::create_invoice(db, non_compliant.id).await?;

    let result = PaymentRunService::new(db).execute(user.id).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    let pending = entity::prelude::Invoice::find()
        .filter(entity::invoice::Column::Status.eq("pending"))
        .count(db)
        .await?;
    assert_eq!(pending, 2);
    assert_eq!(entity::prelude::PaymentRun::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PaymentRunItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests looking up an unknown run.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn get_by_id_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentRunService::new(db).get_by_id(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
