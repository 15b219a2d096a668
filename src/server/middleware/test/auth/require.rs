use super::*;

/// Tests a request without a signed-in user.
///
/// Expected: Err(AuthError::UserNotInSession), even when no permission is required
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user profile.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the session's user ID
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests an authenticated user with an empty permission list.
///
/// Expected: Ok(User) for a viewer
#[tokio::test]
async fn grants_read_access_to_any_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let viewer = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(viewer.id).await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, viewer.id);
    assert_eq!(user.role, UserRole::Viewer);

    Ok(())
}

/// Tests a role lacking one of several permissions.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing permission
#[tokio::test]
async fn denies_when_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let finance = factory::user_profile::UserProfileFactory::new(db)
        .role("finance")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(finance.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManagePayments, Permission::ReviewDocuments])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, finance.id);
            assert!(message.contains("document review"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests an admin passes every permission.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn admin_passes_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[
            Permission::Admin,
            Permission::ManagePayments,
            Permission::ReviewDocuments,
        ])
        .await?;

    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}
