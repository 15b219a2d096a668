use crate::server::{
    data::gas_safe_cache::GasSafeCacheRepository,
    model::gas_safe::{freshness_cutoff, GasSafeRecord},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests a record fetched within the last day is returned.
///
/// Expected: Ok(Some) with the cached engineer name
#[tokio::test]
async fn finds_fresh_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GasSafeCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gas_safe_cache::GasSafeCacheFactory::new(db, "1234567")
        .engineer_name("Jo Bloggs")
        .fetched_at(Utc::now() - Duration::hours(23))
        .build()
        .await?;

    let record = GasSafeCacheRepository::new(db)
        .find_fresh("1234567", freshness_cutoff(Utc::now()))
        .await?;

    assert_eq!(record.unwrap().engineer_name.as_deref(), Some("Jo Bloggs"));

    Ok(())
}

/// Tests a record older than a day is ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_stale_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GasSafeCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gas_safe_cache::GasSafeCacheFactory::new(db, "1234567")
        .fetched_at(Utc::now() - Duration::hours(25))
        .build()
        .await?;

    let record = GasSafeCacheRepository::new(db)
        .find_fresh("1234567", freshness_cutoff(Utc::now()))
        .await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests upserting replaces the existing row for the licence.
///
/// Expected: Ok with a single row holding the newer values
#[tokio::test]
async fn upsert_replaces_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GasSafeCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gas_safe_cache::GasSafeCacheFactory::new(db, "1234567")
        .fetched_at(Utc::now() - Duration::days(3))
        .build()
        .await?;

    let now = Utc::now();
    let repo = GasSafeCacheRepository::new(db);
    repo.upsert(GasSafeRecord {
        licence_number: "1234567".to_string(),
        engineer_name: None,
        business_name: Some("Warm Homes Ltd".to_string()),
        registration_status: "not_found".to_string(),
        is_valid: false,
        registration_expires_at: None,
        fetched_at: now,
    })
    .await?;

    let record = repo
        .find_fresh("1234567", freshness_cutoff(now))
        .await?
        .unwrap();
    assert!(!record.is_valid);
    assert_eq!(record.registration_status, "not_found");
    assert_eq!(record.business_name.as_deref(), Some("Warm Homes Ltd"));

    Ok(())
}

/// Tests purging stale rows keeps fresh ones.
///
/// Expected: Ok(1) and the fresh row remains
#[tokio::test]
async fn deletes_only_stale_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GasSafeCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gas_safe_cache::GasSafeCacheFactory::new(db, "1111111")
        .fetched_at(Utc::now() - Duration::hours(30))
        .build()
        .await?;
    factory::gas_safe_cache::GasSafeCacheFactory::new(db, "2222222")
        .build()
        .await?;

    let now = Utc::now();
    let repo = GasSafeCacheRepository::new(db);
    let deleted = repo.delete_stale(freshness_cutoff(now)).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_fresh("2222222", freshness_cutoff(now))
        .await?
        .is_some());

    Ok(())
}
