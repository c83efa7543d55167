use super::*;

fn params(expected_in_days: i64) -> CreateCropParams {
    let today = Utc::now().date_naive();
    CreateCropParams {
        crop_name: " Maize ".to_string(),
        variety: Some("".to_string()),
        planted_date: today,
        expected_harvest_date: today + Duration::days(expected_in_days),
        growth_status: "Seedling".to_string(),
        health_status: "Healthy".to_string(),
        notes: None,
    }
}

/// Tests creating a crop entry.
///
/// Expected: Ok with trimmed name and a blank variety stored as none
#[tokio::test]
async fn creates_crop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = CropService::new(db);
    let crop = service.create(user.id, params(90)).await?;

    assert_eq!(crop.user_id, user.id);
    assert_eq!(crop.crop_name, "Maize");
    assert_eq!(crop.variety, None);
    assert_eq!(crop.actual_harvest_date, None);

    Ok(())
}

/// Tests an expected harvest before the planting date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_harvest_before_planting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = CropService::new(db);
    let result = service.create(user.id, params(-1)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
