use super::*;

/// Tests moving the planting date after the stored expected harvest.
///
/// Expected: Err(BadRequest); the submitted date is checked against the stored one
#[tokio::test]
async fn checks_dates_against_stored_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::crop_tracker::create_crop(db, user.id).await?;

    let service = CropService::new(db);
    let crop = service.get_by_id(entity.id).await?.unwrap();

    let result = service
        .update(
            &crop,
            UpdateCropParams {
                planted_date: Some(crop.expected_harvest_date + Duration::days(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests recording the actual harvest.
///
/// Expected: Ok with the actual harvest date and new growth status set
#[tokio::test]
async fn records_harvest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::crop_tracker::create_crop(db, user.id).await?;

    let service = CropService::new(db);
    let crop = service.get_by_id(entity.id).await?.unwrap();
    let harvested_on = crop.planted_date + Duration::days(110);

    let updated = service
        .update(
            &crop,
            UpdateCropParams {
                actual_harvest_date: Some(harvested_on),
                growth_status: Some("Harvested".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.actual_harvest_date, Some(harvested_on));
    assert_eq!(updated.growth_status, "Harvested");
    assert_eq!(updated.health_status, "Healthy");

    Ok(())
}
