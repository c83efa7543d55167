use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
    util::validate::require_text,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a notification after checking both fields carry text.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        let recipient = require_text("recipient", &params.recipient)?;
        let message = require_text("message", &params.message)?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParams { recipient, message })
            .await
    }

    pub async fn get_by_recipient(&self, recipient: &str) -> Result<Vec<Notification>, AppError> {
        NotificationRepository::new(self.db)
            .get_by_recipient(recipient.trim())
            .await
    }
}
