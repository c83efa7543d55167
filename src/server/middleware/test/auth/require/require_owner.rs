use super::*;

/// Tests the owner passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let owner = factory::user::create_user(db).await?;
    let owner_id = owner.id;
    let headers = bearer_for(&tokens, owner);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(owner_id)])
        .await?;

    assert_eq!(user.id, owner_id);

    Ok(())
}

/// Tests an admin passes the ownership check for someone else's resource.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let headers = bearer_for(&tokens, admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(owner.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests another farmer is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_farmer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let headers = bearer_for(&tokens, intruder);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(owner.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that authorship checks grant no exception to admins.
///
/// Expected: Err(AuthError::AccessDenied) for the admin, Ok for the author
#[tokio::test]
async fn author_check_denies_admin() -> Result<(), AppError> {
    use crate::server::middleware::auth::ensure;

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = User::from_entity(factory::user::create_user(db).await?)?;
    let admin = User::from_entity(factory::user::create_admin(db).await?)?;

    assert!(ensure(&author, &Permission::Author(author.id)).is_ok());
    assert!(matches!(
        ensure(&admin, &Permission::Author(author.id)),
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
