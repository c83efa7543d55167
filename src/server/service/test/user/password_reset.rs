use super::*;

/// Tests the full reset flow: request a code by email, then reset with it.
///
/// Expected: Email holding the code is sent, the new password works and the code
/// cannot be used twice
#[tokio::test]
async fn resets_password_with_emailed_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let reset_codes = PasswordResetService::new();
    let mailer = RecordingMailer::default();
    let service = UserService::new(db);

    service
        .request_password_reset(&user.email, &reset_codes, &mailer)
        .await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, user.email);
    let code = sent[0].body.split("code is ").nth(1).unwrap()[..6].to_string();

    service
        .reset_password(&user.email, &code, "new-password-1", &reset_codes)
        .await?;

    let tokens = TokenService::new("reset-test-secret");
    let (_, logged_in) = service
        .login(&tokens, &user.email, "new-password-1")
        .await?;
    assert_eq!(logged_in.id, user.id);

    let reused = service
        .reset_password(&user.email, &code, "another-password", &reset_codes)
        .await;
    assert!(matches!(reused, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting a reset for an email with no account.
///
/// Expected: Err(NotFound) and no email sent
#[tokio::test]
async fn unknown_email_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reset_codes = PasswordResetService::new();
    let mailer = RecordingMailer::default();
    let service = UserService::new(db);

    let result = service
        .request_password_reset("ghost@example.com", &reset_codes, &mailer)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests resetting with a code that was never issued.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let reset_codes = PasswordResetService::new();
    reset_codes.generate(&user.email).await;

    let service = UserService::new(db);
    let result = service
        .reset_password(&user.email, "000000x", "new-password-1", &reset_codes)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
