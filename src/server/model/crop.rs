//! Crop tracker domain model and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::crop::{CreateCropDto, CropDto, UpdateCropDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: i32,
    pub user_id: i32,
    pub crop_name: String,
    pub variety: Option<String>,
    pub planted_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub actual_harvest_date: Option<NaiveDate>,
    /// Free text, e.g. "Seedling" or "Flowering".
    pub growth_status: String,
    pub health_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Crop {
    pub fn from_entity(entity: entity::crop_tracker::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            crop_name: entity.crop_name,
            variety: entity.variety,
            planted_date: entity.planted_date,
            expected_harvest_date: entity.expected_harvest_date,
            actual_harvest_date: entity.actual_harvest_date,
            growth_status: entity.growth_status,
            health_status: entity.health_status,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CropDto {
        CropDto {
            id: self.id,
            user_id: self.user_id,
            crop_name: self.crop_name,
            variety: self.variety,
            planted_date: self.planted_date,
            expected_harvest_date: self.expected_harvest_date,
            actual_harvest_date: self.actual_harvest_date,
            growth_status: self.growth_status,
            health_status: self.health_status,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCropParams {
    pub crop_name: String,
    pub variety: Option<String>,
    pub planted_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub growth_status: String,
    pub health_status: String,
    pub notes: Option<String>,
}

impl CreateCropParams {
    pub fn from_dto(dto: CreateCropDto) -> Self {
        Self {
            crop_name: dto.crop_name,
            variety: dto.variety,
            planted_date: dto.planted_date,
            expected_harvest_date: dto.expected_harvest_date,
            growth_status: dto.growth_status,
            health_status: dto.health_status,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCropParams {
    pub crop_name: Option<String>,
    pub variety: Option<String>,
    pub planted_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub actual_harvest_date: Option<NaiveDate>,
    pub growth_status: Option<String>,
    pub health_status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateCropParams {
    pub fn from_dto(dto: UpdateCropDto) -> Self {
        Self {
            crop_name: dto.crop_name,
            variety: dto.variety,
            planted_date: dto.planted_date,
            expected_harvest_date: dto.expected_harvest_date,
            actual_harvest_date: dto.actual_harvest_date,
            growth_status: dto.growth_status,
            health_status: dto.health_status,
            notes: dto.notes,
        }
    }
}
