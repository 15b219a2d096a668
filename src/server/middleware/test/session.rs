use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
};

/// Tests the CSRF token can only be taken once.
///
/// Expected: Some(token) on the first take, None on the second
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    assert_eq!(csrf.take_token().await?.as_deref(), Some("state-123"));
    assert_eq!(csrf.take_token().await?, None);

    Ok(())
}

/// Tests logging out removes the signed-in user.
///
/// Expected: Some(id) after login, None after clear
#[tokio::test]
async fn clear_removes_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user_id(7).await?;
    assert_eq!(auth.get_user_id().await?, Some(7));

    auth.clear().await?;
    assert_eq!(auth.get_user_id().await?, None);

    Ok(())
}
