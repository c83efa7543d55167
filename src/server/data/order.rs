//! Order data repository.
//!
//! Orders are stored as one `orders` row plus one `order_item` row per line. Inserts and
//! deletes touch both tables inside one transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::order::{NewOrder, Order, OrderStatus},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending order and its lines.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its lines
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(order.user_id),
            total: ActiveValue::Set(order.total),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            payment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let line = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(entity.id),
                product_id: ActiveValue::Set(item.product_id),
                product_name: ActiveValue::Set(item.product_name),
                unit_price: ActiveValue::Set(item.unit_price),
                quantity: ActiveValue::Set(item.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(line);
        }

        txn.commit().await?;

        Order::from_entity(entity, items)
    }

    /// Finds an order with its lines.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Order::from_entity(entity, items).map(Some)
    }

    /// Lists orders newest first, optionally restricted to one user.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Order>, AppError> {
        let mut query = entity::prelude::Order::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::order::Column::UserId.eq(user_id));
        }
        let orders = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch all lines in one query and group them by order
        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
        {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect()
    }

    /// Marks an order as paid by `payment_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Order updated
    /// - `Ok(false)` - No order with that ID
    pub async fn mark_paid(&self, id: i32, payment_id: i32) -> Result<bool, AppError> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model: entity::order::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(OrderStatus::Paid.as_str().to_string());
        active_model.payment_id = ActiveValue::Set(Some(payment_id));
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Returns an order paid by `payment_id` to pending and clears its payment.
    ///
    /// Orders paid by a different payment are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Order reverted
    /// - `Ok(false)` - No order with that ID, or it is not held by `payment_id`
    pub async fn mark_pending(&self, id: i32, payment_id: i32) -> Result<bool, AppError> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };
        if entity.payment_id != Some(payment_id) {
            return Ok(false);
        }

        let mut active_model: entity::order::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(OrderStatus::Pending.as_str().to_string());
        active_model.payment_id = ActiveValue::Set(None);
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Deletes an order and its lines.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Order::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
