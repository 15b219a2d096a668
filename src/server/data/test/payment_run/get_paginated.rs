use super::*;
use chrono::Duration;

/// Tests run history is returned newest first.
///
/// Expected: Ok with the later run first and a total of 2
#[tokio::test]
async fn returns_newest_runs_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;
    let repo = PaymentRunRepository::new(db);
    let older = repo
        .create(user.id, 0, Utc::now() - Duration::days(7))
        .await?;
    let newer = repo.create(user.id, 0, Utc::now()).await?;

    let (runs, total) = repo.get_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(runs[0].id, newer.id);
    assert_eq!(runs[1].id, older.id);

    Ok(())
}

/// Tests looking up a run that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_run() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let detail = PaymentRunRepository::new(db).find_with_items(1).await?;

    assert!(detail.is_none());

    Ok(())
}
