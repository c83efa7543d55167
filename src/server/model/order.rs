//! Order domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// Order line with product name and price captured at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: i32,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            product_name: entity.product_name,
            unit_price: entity.unit_price,
            quantity: entity.quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product_id: self.product_id,
            product_name: self.product_name,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub total: f64,
    pub status: OrderStatus,
    /// Payment that settled the order, once paid.
    pub payment_id: Option<i32>,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Converts an order row and its line rows into the domain model.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored status is not recognized
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        let status =
            OrderStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownStoredValue {
                field: "orders.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            total: entity.total,
            status,
            payment_id: entity.payment_id,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            total: self.total,
            status: self.status.as_str().to_string(),
            payment_id: self.payment_id,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

/// Requested product and quantity for a new order.
#[derive(Debug, Clone)]
pub struct OrderLineParams {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub lines: Vec<OrderLineParams>,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            lines: dto
                .items
                .into_iter()
                .map(|line| OrderLineParams {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// Fully priced order ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub total: f64,
    pub items: Vec<OrderItem>,
}
