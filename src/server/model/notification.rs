use chrono::{DateTime, Utc};

use crate::model::notification::{CreateNotificationDto, NotificationDto};

/// Message addressed to a recipient, read by polling.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    /// Recipient identifier, a user ID or a billing `user_ref`.
    pub recipient: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            recipient: entity.recipient,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            recipient: self.recipient,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient: String,
    pub message: String,
}

impl CreateNotificationParams {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }

    pub fn from_dto(dto: CreateNotificationDto) -> Self {
        Self::new(dto.recipient, dto.message)
    }
}
