//! Order factory for creating test orders and their lines.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// Lines are snapshotted from the given product models; the order total is the
/// sum of `price * quantity` over all lines.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: String,
    lines: Vec<(i32, String, f64, i32)>,
}

impl<'a> OrderFactory<'a> {
    /// Defaults: status `"Pending"`, no lines.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: "Pending".to_string(),
            lines: Vec::new(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Adds a line for `quantity` units of `product` at its current price.
    pub fn line(mut self, product: &entity::product::Model, quantity: i32) -> Self {
        self.lines
            .push((product.id, product.name.clone(), product.price, quantity));
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let total = self
            .lines
            .iter()
            .map(|(_, _, price, quantity)| price * *quantity as f64)
            .sum();

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            total: ActiveValue::Set(total),
            status: ActiveValue::Set(self.status),
            payment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (product_id, product_name, unit_price, quantity) in self.lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product_id),
                product_name: ActiveValue::Set(product_name),
                unit_price: ActiveValue::Set(unit_price),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an empty pending order for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}
