use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::crop::{CreateCropParams, Crop, UpdateCropParams},
};

/// Repository for crop tracker entries.
pub struct CropRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CropRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, params: CreateCropParams) -> Result<Crop, AppError> {
        let entity = entity::crop_tracker::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            crop_name: ActiveValue::Set(params.crop_name),
            variety: ActiveValue::Set(params.variety),
            planted_date: ActiveValue::Set(params.planted_date),
            expected_harvest_date: ActiveValue::Set(params.expected_harvest_date),
            actual_harvest_date: ActiveValue::Set(None),
            growth_status: ActiveValue::Set(params.growth_status),
            health_status: ActiveValue::Set(params.health_status),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Crop::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Crop>, AppError> {
        let entity = entity::prelude::CropTracker::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Crop::from_entity))
    }

    /// Lists entries ordered by planting date, newest first.
    ///
    /// `user_id` of `None` returns every user's entries.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Crop>, AppError> {
        let mut query = entity::prelude::CropTracker::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::crop_tracker::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_desc(entity::crop_tracker::Column::PlantedDate)
            .order_by_desc(entity::crop_tracker::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Crop::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateCropParams) -> Result<Crop, AppError> {
        let entity = entity::prelude::CropTracker::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Crop with id {} not found", id)))?;

        let mut active_model: entity::crop_tracker::ActiveModel = entity.into();
        if let Some(crop_name) = params.crop_name {
            active_model.crop_name = ActiveValue::Set(crop_name);
        }
        if let Some(variety) = params.variety {
            active_model.variety = ActiveValue::Set(Some(variety));
        }
        if let Some(planted_date) = params.planted_date {
            active_model.planted_date = ActiveValue::Set(planted_date);
        }
        if let Some(expected) = params.expected_harvest_date {
            active_model.expected_harvest_date = ActiveValue::Set(expected);
        }
        if let Some(actual) = params.actual_harvest_date {
            active_model.actual_harvest_date = ActiveValue::Set(Some(actual));
        }
        if let Some(growth_status) = params.growth_status {
            active_model.growth_status = ActiveValue::Set(growth_status);
        }
        if let Some(health_status) = params.health_status {
            active_model.health_status = ActiveValue::Set(health_status);
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }

        Ok(Crop::from_entity(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::CropTracker::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
