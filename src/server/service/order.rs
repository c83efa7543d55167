//! Order placement against the product catalogue.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::{auth::AuthError, AppError},
    model::{
        order::{CreateOrderParams, NewOrder, Order, OrderItem, OrderStatus},
        user::User,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for `user_id`.
    ///
    /// Lines for the same product are merged. Every product must exist and have enough
    /// stock for the merged quantity; prices are snapshotted at order time. Stock is not
    /// reserved.
    ///
    /// # Returns
    /// - `Ok(Order)` - Pending order with its computed total
    /// - `Err(AppError::BadRequest)` - Empty order, non-positive quantity, unknown
    ///   product or insufficient stock
    pub async fn create(&self, user_id: i32, params: CreateOrderParams) -> Result<Order, AppError> {
        if params.lines.is_empty() {
            return Err(AppError::BadRequest(
                "An order needs at least one item".to_string(),
            ));
        }

        // Merged quantities, in first-seen order.
        let mut quantities: Vec<(i32, i32)> = Vec::new();
        let mut index: HashMap<i32, usize> = HashMap::new();
        for line in params.lines {
            if line.quantity <= 0 {
                return Err(AppError::BadRequest(format!(
                    "Quantity for product {} must be at least 1",
                    line.product_id
                )));
            }
            match index.get(&line.product_id) {
                Some(&i) => {
                    quantities[i].1 = quantities[i].1.checked_add(line.quantity).ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Quantity for product {} is too large",
                            line.product_id
                        ))
                    })?;
                }
                None => {
                    index.insert(line.product_id, quantities.len());
                    quantities.push((line.product_id, line.quantity));
                }
            }
        }

        let product_repo = ProductRepository::new(self.db);
        let mut items = Vec::with_capacity(quantities.len());
        for (product_id, quantity) in quantities {
            let Some(product) = product_repo.find_by_id(product_id).await? else {
                return Err(AppError::BadRequest(format!(
                    "Product {} does not exist",
                    product_id
                )));
            };
            if quantity > product.quantity {
                return Err(AppError::BadRequest(format!(
                    "Only {} of {} in stock",
                    product.quantity, product.name
                )));
            }

            items.push(OrderItem {
                product_id,
                product_name: product.name,
                unit_price: product.price,
                quantity,
            });
        }

        let total = items.iter().map(OrderItem::line_total).sum();

        let order = OrderRepository::new(self.db)
            .create(NewOrder {
                user_id,
                total,
                items,
            })
            .await?;

        tracing::info!("User {} placed order {} ({:.2})", user_id, order.id, total);

        Ok(order)
    }

    /// Lists one user's orders, or all orders when `user_id` is `None`.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db).get_all(user_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        OrderRepository::new(self.db).find_by_id(id).await
    }

    /// Cancels an order.
    ///
    /// Admins may delete any order; owners only while it is still pending.
    ///
    /// # Returns
    /// - `Ok(())` - Order deleted
    /// - `Err(AppError::NotFound)` - No order with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the order nor is an admin
    /// - `Err(AppError::BadRequest)` - Owner attempted to delete a paid order
    pub async fn delete(&self, id: i32, caller: &User) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(order) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Order {} not found", id)));
        };

        if !caller.is_admin() {
            if order.user_id != caller.id {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("User attempted to delete order {} owned by another user", id),
                )
                .into());
            }
            if order.status != OrderStatus::Pending {
                return Err(AppError::BadRequest(
                    "Only pending orders can be deleted".to_string(),
                ));
            }
        }

        repo.delete(id).await?;
        tracing::info!("Order {} deleted by user {}", id, caller.id);

        Ok(())
    }
}
