use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer_for(&tokens, admin.clone());

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());
    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests farmer is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_farmer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let farmer = factory::user::create_user(db).await?;
    let farmer_id = farmer.id;
    let headers = bearer_for(&tokens, farmer);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, farmer_id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that the role is read from the database rather than the token.
///
/// Expected: Err(AuthError::AccessDenied) after the admin is demoted
#[tokio::test]
async fn denies_demoted_admin_with_old_token() -> Result<(), AppError> {
    use crate::server::{data::user::UserRepository, model::user::Role};

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = factory::user::create_admin(db).await?;
    let admin_id = admin.id;
    let headers = bearer_for(&tokens, admin);
    UserRepository::new(db)
        .set_role(admin_id, Role::Farmer)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
