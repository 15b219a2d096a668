use crate::server::{
    data::activity_log::ActivityLogRepository, model::activity::CreateActivityParams,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests the feed returns the newest rows up to the limit.
///
/// Expected: Ok with the two most recent rows, newest first
#[tokio::test]
async fn returns_newest_rows_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityLogRepository::new(db);
    for n in 1..=3 {
        repo.create(CreateActivityParams::new(
            None,
            "document_expired",
            "compliance_document",
            Some(n),
            format!("Document {} expired", n),
        ))
        .await?;
    }

    let recent = repo.get_recent(2).await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].entity_id, Some(3));
    assert_eq!(recent[1].entity_id, Some(2));

    Ok(())
}
