use super::*;

/// Tests creating a crop tracker entry.
///
/// Expected: Ok with no actual harvest date yet
#[tokio::test]
async fn creates_crop_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CropRepository::new(db);
    let crop = repo
        .create(
            user.id,
            CreateCropParams {
                crop_name: "Maize".to_string(),
                variety: None,
                planted_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                expected_harvest_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
                growth_status: "Seedling".to_string(),
                health_status: "Healthy".to_string(),
                notes: Some("Drip irrigated".to_string()),
            },
        )
        .await?;

    assert_eq!(crop.user_id, user.id);
    assert!(crop.actual_harvest_date.is_none());
    assert_eq!(repo.find_by_id(crop.id).await?.unwrap().crop_name, "Maize");

    Ok(())
}
