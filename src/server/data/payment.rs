//! Payment data repository.
//!
//! A payment row is stored together with its item snapshot rows. Status changes are
//! single-row updates that also bump `updated_at`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::payment::{CreatePaymentParams, Payment, PaymentStatus},
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a payment and its item snapshot.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The created payment with its items
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::payment::ActiveModel {
            billing_id: ActiveValue::Set(params.billing_id),
            order_ref: ActiveValue::Set(params.order_ref),
            method: ActiveValue::Set(params.method.as_str().to_string()),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            amount: ActiveValue::Set(params.amount),
            card_holder: ActiveValue::Set(params.card_holder),
            card_last4: ActiveValue::Set(params.card_last4),
            card_expiry: ActiveValue::Set(params.card_expiry),
            slip_image: ActiveValue::Set(params.slip_image),
            invoice_path: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(params.items.len());
        for item in params.items {
            let line = entity::payment_item::ActiveModel {
                payment_id: ActiveValue::Set(entity.id),
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

        Payment::from_entity(entity, items)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, AppError> {
        let Some(entity) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = self.items_for(id).await?;

        Payment::from_entity(entity, items).map(Some)
    }

    /// Lists every payment, newest first.
    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        let payments = entity::prelude::Payment::find()
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?;

        if payments.is_empty() {
            return Ok(Vec::new());
        }

        let payment_ids: Vec<i32> = payments.iter().map(|p| p.id).collect();
        let mut items_by_payment: HashMap<i32, Vec<entity::payment_item::Model>> = HashMap::new();
        for item in entity::prelude::PaymentItem::find()
            .filter(entity::payment_item::Column::PaymentId.is_in(payment_ids))
            .order_by_asc(entity::payment_item::Column::Id)
            .all(self.db)
            .await?
        {
            items_by_payment
                .entry(item.payment_id)
                .or_default()
                .push(item);
        }

        payments
            .into_iter()
            .map(|payment| {
                let items = items_by_payment.remove(&payment.id).unwrap_or_default();
                Payment::from_entity(payment, items)
            })
            .collect()
    }

    /// Writes a new status.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The updated payment
    /// - `Err(AppError::DbErr(RecordNotFound))` - No payment with that ID
    pub async fn update_status(&self, id: i32, status: PaymentStatus) -> Result<Payment, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        let items = self.items_for(id).await?;

        Payment::from_entity(entity, items)
    }

    pub async fn set_invoice_path(&self, id: i32, path: String) -> Result<Payment, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.invoice_path = ActiveValue::Set(Some(path));
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        let items = self.items_for(id).await?;

        Payment::from_entity(entity, items)
    }

    /// Deletes a payment and its item snapshot.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::PaymentItem::delete_many()
            .filter(entity::payment_item::Column::PaymentId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Payment::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn items_for(&self, payment_id: i32) -> Result<Vec<entity::payment_item::Model>, DbErr> {
        entity::prelude::PaymentItem::find()
            .filter(entity::payment_item::Column::PaymentId.eq(payment_id))
            .order_by_asc(entity::payment_item::Column::Id)
            .all(self.db)
            .await
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::payment::ActiveModel, AppError> {
        let entity = entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Payment with id {} not found",
                id
            )))?;

        Ok(entity.into())
    }
}
