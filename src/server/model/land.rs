//! Land parcel domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::land::{CreateLandDto, LandDto, UpdateLandDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Land {
    pub id: i32,
    /// Generated external identifier, `LND-` followed by 8 uppercase alphanumerics.
    pub land_id: String,
    pub owner_id: i32,
    pub name: String,
    pub location: String,
    pub district: String,
    pub size_acres: f64,
    pub soil_type: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Land {
    pub fn from_entity(entity: entity::land::Model) -> Self {
        Self {
            id: entity.id,
            land_id: entity.land_id,
            owner_id: entity.owner_id,
            name: entity.name,
            location: entity.location,
            district: entity.district,
            size_acres: entity.size_acres,
            soil_type: entity.soil_type,
            photo: entity.photo,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LandDto {
        LandDto {
            id: self.id,
            land_id: self.land_id,
            owner_id: self.owner_id,
            name: self.name,
            location: self.location,
            district: self.district,
            size_acres: self.size_acres,
            soil_type: self.soil_type,
            photo: self.photo,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLandParams {
    pub name: String,
    pub location: String,
    pub district: String,
    pub size_acres: f64,
    pub soil_type: Option<String>,
}

impl CreateLandParams {
    pub fn from_dto(dto: CreateLandDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            district: dto.district,
            size_acres: dto.size_acres,
            soil_type: dto.soil_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLandParams {
    pub name: Option<String>,
    pub location: Option<String>,
    pub district: Option<String>,
    pub size_acres: Option<f64>,
    pub soil_type: Option<String>,
}

impl UpdateLandParams {
    pub fn from_dto(dto: UpdateLandDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            district: dto.district,
            size_acres: dto.size_acres,
            soil_type: dto.soil_type,
        }
    }
}
