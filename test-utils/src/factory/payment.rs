//! Payment factory for creating test payments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments against a billing record.
///
/// Card payments get a holder, last four digits and expiry; slip payments get a
/// slip image path.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    billing_id: i32,
    order_ref: String,
    method: String,
    status: String,
    amount: f64,
}

impl<'a> PaymentFactory<'a> {
    /// Defaults: order_ref `"EXT-1"`, method `"slip"`, status `"pending"`, amount 500.0.
    pub fn new(db: &'a DatabaseConnection, billing_id: i32) -> Self {
        Self {
            db,
            billing_id,
            order_ref: "EXT-1".to_string(),
            method: "slip".to_string(),
            status: "pending".to_string(),
            amount: 500.0,
        }
    }

    pub fn order_ref(mut self, order_ref: impl Into<String>) -> Self {
        self.order_ref = order_ref.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let is_card = self.method == "card";
        let now = Utc::now();

        entity::payment::ActiveModel {
            billing_id: ActiveValue::Set(self.billing_id),
            order_ref: ActiveValue::Set(self.order_ref),
            method: ActiveValue::Set(self.method),
            status: ActiveValue::Set(self.status),
            amount: ActiveValue::Set(self.amount),
            card_holder: ActiveValue::Set(is_card.then(|| "Test Holder".to_string())),
            card_last4: ActiveValue::Set(is_card.then(|| "1111".to_string())),
            card_expiry: ActiveValue::Set(is_card.then(|| "12/99".to_string())),
            slip_image: ActiveValue::Set((!is_card).then(|| "/uploads/slip.png".to_string())),
            invoice_path: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending slip payment with default values.
pub async fn create_payment(
    db: &DatabaseConnection,
    billing_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, billing_id).build().await
}
