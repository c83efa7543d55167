use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItemDto {
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub billing_id: i32,
    pub order_id: String,
    /// `card` or `slip`.
    pub method: String,
    /// `pending`, `completed` or `dispatched`.
    pub status: String,
    pub amount: f64,
    pub card_holder: Option<String>,
    /// Masked card number, only the last four digits are kept.
    pub card_number: Option<String>,
    pub card_expiry: Option<String>,
    pub slip_image: Option<String>,
    pub invoice_path: Option<String>,
    pub items: Vec<PaymentItemDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentDto {
    pub billing_id: i32,
    pub order_id: String,
    pub card_holder: String,
    pub card_number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvv: String,
    /// Required when `orderId` does not refer to an order in this system.
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinalizePaymentDto {
    pub order_id: String,
    pub billing_id: i32,
    pub method: String,
}
