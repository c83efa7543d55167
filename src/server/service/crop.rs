//! Crop tracker service.
//!
//! Plain CRUD over a farmer's crop entries. Harvest dates are checked against the
//! planting date, on update after merging the submitted fields with the stored ones.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::crop::CropRepository,
    error::AppError,
    model::crop::{CreateCropParams, Crop, UpdateCropParams},
    util::validate::{optional_text, require_text},
};

pub struct CropService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CropService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a crop entry owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Crop)` - Stored crop entry
    /// - `Err(AppError::BadRequest)` - Missing name or status, or expected harvest before planting
    pub async fn create(&self, user_id: i32, params: CreateCropParams) -> Result<Crop, AppError> {
        let crop_name = require_text("cropName", &params.crop_name)?;
        let growth_status = require_text("growthStatus", &params.growth_status)?;
        let health_status = require_text("healthStatus", &params.health_status)?;
        check_harvest_dates(params.planted_date, params.expected_harvest_date, None)?;

        CropRepository::new(self.db)
            .create(
                user_id,
                CreateCropParams {
                    crop_name,
                    variety: optional_text(params.variety),
                    planted_date: params.planted_date,
                    expected_harvest_date: params.expected_harvest_date,
                    growth_status,
                    health_status,
                    notes: optional_text(params.notes),
                },
            )
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Crop>, AppError> {
        CropRepository::new(self.db).find_by_id(id).await
    }

    /// Lists crop entries newest planting first, optionally for one user.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Crop>, AppError> {
        CropRepository::new(self.db).get_all(user_id).await
    }

    pub async fn update(&self, crop: &Crop, params: UpdateCropParams) -> Result<Crop, AppError> {
        let crop_name = params
            .crop_name
            .map(|name| require_text("cropName", &name))
            .transpose()?;
        let growth_status = params
            .growth_status
            .map(|status| require_text("growthStatus", &status))
            .transpose()?;
        let health_status = params
            .health_status
            .map(|status| require_text("healthStatus", &status))
            .transpose()?;

        check_harvest_dates(
            params.planted_date.unwrap_or(crop.planted_date),
            params
                .expected_harvest_date
                .unwrap_or(crop.expected_harvest_date),
            params.actual_harvest_date.or(crop.actual_harvest_date),
        )?;

        CropRepository::new(self.db)
            .update(
                crop.id,
                UpdateCropParams {
                    crop_name,
                    variety: optional_text(params.variety),
                    planted_date: params.planted_date,
                    expected_harvest_date: params.expected_harvest_date,
                    actual_harvest_date: params.actual_harvest_date,
                    growth_status,
                    health_status,
                    notes: optional_text(params.notes),
                },
            )
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CropRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Crop {} not found", id)));
        }
        Ok(())
    }
}

fn check_harvest_dates(
    planted: NaiveDate,
    expected: NaiveDate,
    actual: Option<NaiveDate>,
) -> Result<(), AppError> {
    if expected < planted {
        return Err(AppError::BadRequest(
            "expectedHarvestDate cannot be before plantedDate".to_string(),
        ));
    }
    if actual.is_some_and(|actual| actual < planted) {
        return Err(AppError::BadRequest(
            "actualHarvestDate cannot be before plantedDate".to_string(),
        ));
    }
    Ok(())
}
