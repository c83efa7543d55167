use super::*;

/// Tests that a user's own username does not count as taken when excluded.
///
/// Expected: taken for others, free for the owner
#[tokio::test]
async fn excludes_own_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("sunil")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.username_taken("sunil", None).await?);
    assert!(!repo.username_taken("sunil", Some(user.id)).await?);
    assert!(!repo.username_taken("other", None).await?);

    Ok(())
}

/// Tests email uniqueness checks ignore letter case.
///
/// Expected: true
#[tokio::test]
async fn detects_email_in_any_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("sunil@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken("SUNIL@example.com", None).await?);

    Ok(())
}
