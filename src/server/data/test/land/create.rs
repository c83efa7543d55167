use super::*;

/// Tests creating a land parcel under a generated external ID.
///
/// Expected: Ok with the external ID stored and reported as taken
#[tokio::test]
async fn creates_land_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let repo = LandRepository::new(db);
    let land = repo
        .create(
            owner.id,
            "LND-AB12CD34".to_string(),
            CreateLandParams {
                name: "North Field".to_string(),
                location: "Gampola".to_string(),
                district: "Kandy".to_string(),
                size_acres: 2.5,
                soil_type: None,
            },
        )
        .await?;

    assert_eq!(land.owner_id, owner.id);
    assert_eq!(land.land_id, "LND-AB12CD34");
    assert!(land.photo.is_none());
    assert!(repo.land_id_exists("LND-AB12CD34").await?);
    assert!(!repo.land_id_exists("LND-00000000").await?);

    Ok(())
}
