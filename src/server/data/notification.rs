use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            recipient: ActiveValue::Set(params.recipient),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Notifications addressed to `recipient`, newest first.
    pub async fn get_by_recipient(&self, recipient: &str) -> Result<Vec<Notification>, AppError> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::Recipient.eq(recipient))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }
}
