use super::*;

/// Tests changing a user's role.
///
/// Expected: Ok(true) and the stored role is `reviewer`
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Reviewer).await?;

    assert!(updated);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, UserRole::Reviewer);

    Ok(())
}

/// Tests changing the role of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .set_role(999, UserRole::Admin)
        .await?;

    assert!(!updated);

    Ok(())
}
