use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

const SECRET: &str = "login-test-secret";

/// Tests logging in by username and by email.
///
/// Expected: Ok with a token whose subject is the user
#[tokio::test]
async fn logs_in_with_username_or_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let service = UserService::new(db);

    for identifier in [user.username.as_str(), user.email.as_str()] {
        let (token, logged_in) = service.login(&tokens, identifier, DEFAULT_PASSWORD).await?;

        assert_eq!(logged_in.id, user.id);
        assert_eq!(tokens.verify(&token)?.sub, user.id);
    }

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown identifier.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let service = UserService::new(db);

    let wrong_password = service.login(&tokens, &user.username, "not-the-password").await;
    let unknown_user = service.login(&tokens, "nobody", DEFAULT_PASSWORD).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
