use super::*;

/// Tests taking another account's username on update.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_username_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(
            user.id,
            UpdateUserParams {
                username: Some(other.username.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests re-submitting a user's own username and email unchanged.
///
/// Expected: Ok, uniqueness ignores the account being updated
#[tokio::test]
async fn keeps_own_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update(
            user.id,
            UpdateUserParams {
                full_name: Some("Renamed Farmer".to_string()),
                username: Some(user.username.clone()),
                email: Some(user.email.clone()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.full_name, "Renamed Farmer");
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests assigning a role that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let result = service.set_role(user.id, "superuser").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let promoted = service.set_role(user.id, "admin").await?;
    assert_eq!(promoted.role, Role::Admin);

    Ok(())
}
