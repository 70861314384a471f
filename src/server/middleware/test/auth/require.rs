use super::*;

/// Tests a fresh login passes the guard.
///
/// Expected: Ok(username)
#[tokio::test]
async fn grants_access_with_valid_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .login("admin", Utc::now() + SESSION_TTL)
        .await?;

    let username = AuthGuard::new(session).require().await?;
    assert_eq!(username, "admin");

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn rejects_missing_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests an expired login is rejected and removed from the session.
///
/// Expected: Err(AuthError::SessionExpired), followed by NotAuthenticated
#[tokio::test]
async fn rejects_and_clears_expired_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .login("admin", Utc::now() - Duration::minutes(1))
        .await?;

    let guard = AuthGuard::new(session);
    match guard.require().await {
        Err(AppError::AuthErr(AuthError::SessionExpired(username))) => {
            assert_eq!(username, "admin");
        }
        other => panic!("Expected SessionExpired error, got: {:?}", other),
    }

    assert!(matches!(
        guard.require().await,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));
    assert!(!AuthSession::new(session).is_authenticated().await?);

    Ok(())
}

/// Tests logout clears the login.
///
/// Expected: Err(AuthError::NotAuthenticated) after clear
#[tokio::test]
async fn rejects_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session
        .login("admin", Utc::now() + SESSION_TTL)
        .await?;
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await;

    assert!(matches!(
        AuthGuard::new(session).require().await,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}
