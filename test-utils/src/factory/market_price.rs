use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a market price entry for `item_name`.
pub async fn create_market_price(
    db: &DatabaseConnection,
    item_name: &str,
    price: f64,
) -> Result<entity::market_price::Model, DbErr> {
    entity::market_price::ActiveModel {
        item_name: ActiveValue::Set(item_name.to_string()),
        category: ActiveValue::Set("Vegetables".to_string()),
        market: ActiveValue::Set("Dambulla".to_string()),
        unit: ActiveValue::Set("kg".to_string()),
        price: ActiveValue::Set(price),
        recorded_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
