//! Land factory for creating test land entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lands owned by a given user.
pub struct LandFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    land_id: String,
    name: String,
    district: String,
    size_acres: f64,
}

impl<'a> LandFactory<'a> {
    /// Defaults: land_id `"LND-T{id:07}"`, name `"Field {id}"`, district `"Kandy"`,
    /// size 2.5 acres.
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            land_id: format!("LND-T{:07}", id),
            name: format!("Field {}", id),
            district: "Kandy".to_string(),
            size_acres: 2.5,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn size_acres(mut self, size_acres: f64) -> Self {
        self.size_acres = size_acres;
        self
    }

    pub async fn build(self) -> Result<entity::land::Model, DbErr> {
        entity::land::ActiveModel {
            land_id: ActiveValue::Set(self.land_id),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set("Peradeniya".to_string()),
            district: ActiveValue::Set(self.district),
            size_acres: ActiveValue::Set(self.size_acres),
            soil_type: ActiveValue::Set(Some("Loam".to_string())),
            photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a land with default values for the given owner.
pub async fn create_land(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::land::Model, DbErr> {
    LandFactory::new(db, owner_id).build().await
}
