use super::*;

fn params(subject: &str, role: Option<UserRole>) -> UpsertUserParams {
    UpsertUserParams {
        subject: subject.to_string(),
        email: format!("{}@example.com", subject),
        name: format!("Name {}", subject),
        role,
    }
}

/// Tests that a first login creates a viewer profile.
///
/// Expected: Ok with role `viewer`
#[tokio::test]
async fn creates_new_user_as_viewer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).upsert(params("abc", None)).await?;

    assert_eq!(user.subject, "abc");
    assert_eq!(user.email, "abc@example.com");
    assert_eq!(user.role, UserRole::Viewer);

    Ok(())
}

/// Tests that logging in again refreshes details without touching the role.
///
/// Expected: Ok with the same ID, new name and the existing `finance` role
#[tokio::test]
async fn keeps_existing_role_on_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user_profile::UserProfileFactory::new(db)
        .subject("abc")
        .role("finance")
        .build()
        .await?;

    let user = UserRepository::new(db).upsert(params("abc", None)).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "Name abc");
    assert_eq!(user.role, UserRole::Finance);

    Ok(())
}

/// Tests that an explicit role overwrites the stored one.
///
/// Expected: Ok with role `admin`
#[tokio::test]
async fn overwrites_role_when_provided() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_profile::UserProfileFactory::new(db)
        .subject("abc")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.upsert(params("abc", Some(UserRole::Admin))).await?;

    assert_eq!(user.role, UserRole::Admin);
    assert!(repo.admin_exists().await?);

    Ok(())
}
