use super::*;

/// Tests that deleting a user removes their lands but not other users' lands.
///
/// Expected: Ok(true), 1 land remaining
#[tokio::test]
async fn deletes_user_and_owned_lands() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::land::create_land(db, user.id).await?;
    factory::land::create_land(db, user.id).await?;
    factory::land::create_land(db, other.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete_with_lands(user.id).await?);

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(entity::prelude::Land::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete_with_lands(42).await?);

    Ok(())
}
