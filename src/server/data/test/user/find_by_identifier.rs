use super::*;

/// Tests login lookup by username.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("kamala")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_identifier("kamala").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests login lookup by email ignores letter case.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("kamala@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_identifier("Kamala@Example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests lookup of an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identifier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_identifier("nobody").await?.is_none());

    Ok(())
}
