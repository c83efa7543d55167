use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a paddy crop entry planted today with a 120 day expected harvest.
pub async fn create_crop(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::crop_tracker::Model, DbErr> {
    let today = Utc::now().date_naive();

    entity::crop_tracker::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        crop_name: ActiveValue::Set("Paddy".to_string()),
        variety: ActiveValue::Set(Some("BG 352".to_string())),
        planted_date: ActiveValue::Set(today),
        expected_harvest_date: ActiveValue::Set(today + Duration::days(120)),
        actual_harvest_date: ActiveValue::Set(None),
        growth_status: ActiveValue::Set("Seedling".to_string()),
        health_status: ActiveValue::Set("Healthy".to_string()),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
