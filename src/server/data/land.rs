use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::land::{CreateLandParams, Land, UpdateLandParams},
};

/// Repository providing database operations for land parcels.
pub struct LandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a land parcel for `owner_id` under the given external `land_id`.
    pub async fn create(
        &self,
        owner_id: i32,
        land_id: String,
        params: CreateLandParams,
    ) -> Result<Land, AppError> {
        let entity = entity::land::ActiveModel {
            land_id: ActiveValue::Set(land_id),
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            district: ActiveValue::Set(params.district),
            size_acres: ActiveValue::Set(params.size_acres),
            soil_type: ActiveValue::Set(params.soil_type),
            photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Land::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Land>, AppError> {
        let entity = entity::prelude::Land::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Land::from_entity))
    }

    /// Checks whether an external land ID is already in use.
    pub async fn land_id_exists(&self, land_id: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Land::find()
            .filter(entity::land::Column::LandId.eq(land_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists lands, newest first, optionally restricted to one owner.
    pub async fn get_all(&self, owner_id: Option<i32>) -> Result<Vec<Land>, AppError> {
        let mut query = entity::prelude::Land::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(entity::land::Column::OwnerId.eq(owner_id));
        }

        let entities = query
            .order_by_desc(entity::land::Column::CreatedAt)
            .order_by_desc(entity::land::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Land::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateLandParams) -> Result<Land, AppError> {
        let mut active_model = self.find_active_model(id).await?;

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(district) = params.district {
            active_model.district = ActiveValue::Set(district);
        }
        if let Some(size_acres) = params.size_acres {
            active_model.size_acres = ActiveValue::Set(size_acres);
        }
        if let Some(soil_type) = params.soil_type {
            active_model.soil_type = ActiveValue::Set(Some(soil_type));
        }

        Ok(Land::from_entity(active_model.update(self.db).await?))
    }

    pub async fn set_photo(&self, id: i32, path: String) -> Result<Land, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.photo = ActiveValue::Set(Some(path));

        Ok(Land::from_entity(active_model.update(self.db).await?))
    }

    /// Deletes a land parcel.
    ///
    /// # Returns
    /// - `Ok(true)` - Land deleted
    /// - `Ok(false)` - No land with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Land::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::land::ActiveModel, AppError> {
        let entity = entity::prelude::Land::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Land with id {} not found", id)))?;

        Ok(entity.into())
    }
}
