//! Forum post and reply factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a post titled `"Post {id}"` authored by `user_id`.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    let id = next_id();

    entity::post::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set(format!("Post {}", id)),
        content: ActiveValue::Set("Leaf curl on chilli plants, any advice?".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a reply to `post_id` authored by `user_id`.
pub async fn create_reply(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::post_reply::Model, DbErr> {
    entity::post_reply::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set("Try neem oil spray.".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
