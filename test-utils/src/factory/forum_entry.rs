use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unanswered question asked by `user_id`.
pub async fn create_forum_entry(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::forum_entry::Model, DbErr> {
    entity::forum_entry::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        question: ActiveValue::Set("When should I apply urea to paddy?".to_string()),
        category: ActiveValue::Set(Some("Fertilizer".to_string())),
        answer: ActiveValue::Set(None),
        answered_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        answered_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
