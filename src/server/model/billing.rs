//! Billing snapshot domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::billing::{BillingDto, CreateBillingDto, UpdateBillingDto};

/// Contact and address details captured for a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub id: i32,
    /// Loose reference to the purchasing user, typically their ID as a string.
    pub user_ref: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

impl Billing {
    pub fn from_entity(entity: entity::billing::Model) -> Self {
        Self {
            id: entity.id,
            user_ref: entity.user_ref,
            full_name: entity.full_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            postal_code: entity.postal_code,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BillingDto {
        BillingDto {
            id: self.id,
            user_ref: self.user_ref,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            postal_code: self.postal_code,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBillingParams {
    pub user_ref: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CreateBillingParams {
    pub fn from_dto(dto: CreateBillingDto) -> Self {
        Self {
            user_ref: dto.user_ref,
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            postal_code: dto.postal_code,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBillingParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl UpdateBillingParams {
    pub fn from_dto(dto: UpdateBillingDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            postal_code: dto.postal_code,
        }
    }
}
