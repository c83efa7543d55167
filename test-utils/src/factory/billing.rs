//! Billing factory for creating test billing snapshots.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BillingFactory<'a> {
    db: &'a DatabaseConnection,
    user_ref: String,
    full_name: String,
    email: String,
}

impl<'a> BillingFactory<'a> {
    /// Defaults: user_ref `"guest"`, name `"Buyer {id}"`, email `"buyer{id}@example.com"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_ref: "guest".to_string(),
            full_name: format!("Buyer {}", id),
            email: format!("buyer{}@example.com", id),
        }
    }

    pub fn user_ref(mut self, user_ref: impl Into<String>) -> Self {
        self.user_ref = user_ref.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub async fn build(self) -> Result<entity::billing::Model, DbErr> {
        entity::billing::ActiveModel {
            user_ref: ActiveValue::Set(self.user_ref),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("0771234567".to_string()),
            address: ActiveValue::Set("12 Temple Road".to_string()),
            city: ActiveValue::Set("Kandy".to_string()),
            postal_code: ActiveValue::Set("20000".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_billing(db: &DatabaseConnection) -> Result<entity::billing::Model, DbErr> {
    BillingFactory::new(db).build().await
}
