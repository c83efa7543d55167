use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::billing::{Billing, CreateBillingParams, UpdateBillingParams},
};

/// Repository providing database operations for billing snapshots.
pub struct BillingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBillingParams) -> Result<Billing, AppError> {
        let entity = entity::billing::ActiveModel {
            user_ref: ActiveValue::Set(params.user_ref),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            postal_code: ActiveValue::Set(params.postal_code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Billing::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Billing>, AppError> {
        let entity = entity::prelude::Billing::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Billing::from_entity))
    }

    /// Lists all billing records, newest first.
    pub async fn get_all(&self) -> Result<Vec<Billing>, AppError> {
        let entities = entity::prelude::Billing::find()
            .order_by_desc(entity::billing::Column::CreatedAt)
            .order_by_desc(entity::billing::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Billing::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateBillingParams) -> Result<Billing, AppError> {
        let entity = entity::prelude::Billing::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Billing with id {} not found",
                id
            )))?;

        let mut active_model: entity::billing::ActiveModel = entity.into();
        if let Some(full_name) = params.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(postal_code) = params.postal_code {
            active_model.postal_code = ActiveValue::Set(postal_code);
        }

        Ok(Billing::from_entity(active_model.update(self.db).await?))
    }

    /// Counts payments that reference this billing record.
    pub async fn payment_count(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BillingId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Billing::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
