use super::*;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Nimal Perera".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Farmer,
        phone: Some("0771234567".to_string()),
        address: None,
    }
}

/// Tests creating a farmer account.
///
/// Expected: Ok with the role stored as farmer and no profile image
#[tokio::test]
async fn creates_farmer_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("nimal", "nimal@example.com")).await?;

    assert_eq!(user.username, "nimal");
    assert_eq!(user.role, Role::Farmer);
    assert!(user.profile_image.is_none());

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert_eq!(db_user.unwrap().role, "farmer");

    Ok(())
}

/// Tests that the unique index rejects a second account with the same email.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("first", "same@example.com")).await?;
    let result = repo.create(params("second", "same@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
