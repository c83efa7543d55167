use super::*;

/// Tests updating size and setting a photo.
///
/// Expected: Ok with new size, photo set, name unchanged
#[tokio::test]
async fn updates_fields_and_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let land = factory::land::LandFactory::new(db, owner.id)
        .name("Paddy Plot")
        .build()
        .await?;

    let repo = LandRepository::new(db);
    repo.update(
        land.id,
        UpdateLandParams {
            size_acres: Some(4.0),
            ..Default::default()
        },
    )
    .await?;
    let updated = repo
        .set_photo(land.id, "/uploads/land-1.png".to_string())
        .await?;

    assert_eq!(updated.size_acres, 4.0);
    assert_eq!(updated.name, "Paddy Plot");
    assert_eq!(updated.photo.as_deref(), Some("/uploads/land-1.png"));

    Ok(())
}

/// Tests deleting a land.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_land_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let land = factory::land::create_land(db, owner.id).await?;

    let repo = LandRepository::new(db);
    assert!(repo.delete(land.id).await?);
    assert!(!repo.delete(land.id).await?);

    Ok(())
}
