//! Land registration service.
//!
//! Generates the external `LND-XXXXXXXX` identifier for new parcels and validates
//! parcel details before they are stored.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::land::LandRepository,
    error::AppError,
    model::land::{CreateLandParams, Land, UpdateLandParams},
    service::storage::FileStorage,
    util::{
        upload::UploadedFile,
        validate::{optional_text, require_text, validate_positive},
    },
};

const LAND_ID_PREFIX: &str = "LND-";
const LAND_ID_LENGTH: usize = 8;
const LAND_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Attempts at finding an unused land ID before giving up.
const LAND_ID_ATTEMPTS: usize = 5;

pub struct LandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a parcel for `owner_id` under a freshly generated land ID.
    ///
    /// # Returns
    /// - `Ok(Land)` - Created parcel
    /// - `Err(AppError::BadRequest)` - Missing name/location/district or non-positive size
    /// - `Err(AppError::InternalError)` - No unused land ID found after several attempts
    pub async fn create(&self, owner_id: i32, params: CreateLandParams) -> Result<Land, AppError> {
        let repo = LandRepository::new(self.db);

        validate_positive("sizeAcres", params.size_acres)?;
        let params = CreateLandParams {
            name: require_text("name", &params.name)?,
            location: require_text("location", &params.location)?,
            district: require_text("district", &params.district)?,
            size_acres: params.size_acres,
            soil_type: optional_text(params.soil_type),
        };

        let land_id = self.unused_land_id(&repo).await?;
        let land = repo.create(owner_id, land_id, params).await?;

        tracing::info!("User {} registered land {}", owner_id, land.land_id);

        Ok(land)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Land>, AppError> {
        LandRepository::new(self.db).find_by_id(id).await
    }

    /// Lists lands for one owner, or all lands when `owner_id` is `None`.
    pub async fn get_all(&self, owner_id: Option<i32>) -> Result<Vec<Land>, AppError> {
        LandRepository::new(self.db).get_all(owner_id).await
    }

    pub async fn update(&self, id: i32, params: UpdateLandParams) -> Result<Land, AppError> {
        if let Some(size_acres) = params.size_acres {
            validate_positive("sizeAcres", size_acres)?;
        }

        let params = UpdateLandParams {
            name: params
                .name
                .map(|name| require_text("name", &name))
                .transpose()?,
            location: params
                .location
                .map(|location| require_text("location", &location))
                .transpose()?,
            district: params
                .district
                .map(|district| require_text("district", &district))
                .transpose()?,
            size_acres: params.size_acres,
            soil_type: optional_text(params.soil_type),
        };

        LandRepository::new(self.db).update(id, params).await
    }

    /// Stores a parcel photo, replacing and removing any previous one.
    pub async fn set_photo(
        &self,
        land: &Land,
        storage: &FileStorage,
        photo: UploadedFile,
    ) -> Result<Land, AppError> {
        let path = storage.save_image(photo, "land").await?;
        let updated = LandRepository::new(self.db).set_photo(land.id, path).await?;

        if let Some(previous) = &land.photo {
            storage.remove_upload(previous).await;
        }

        Ok(updated)
    }

    /// Deletes a parcel and its photo.
    pub async fn delete(&self, land: &Land, storage: &FileStorage) -> Result<(), AppError> {
        LandRepository::new(self.db).delete(land.id).await?;

        if let Some(photo) = &land.photo {
            storage.remove_upload(photo).await;
        }

        Ok(())
    }

    async fn unused_land_id(&self, repo: &LandRepository<'_>) -> Result<String, AppError> {
        for _ in 0..LAND_ID_ATTEMPTS {
            let candidate = generate_land_id();
            if !repo.land_id_exists(&candidate).await? {
                return Ok(candidate);
            }
            tracing::debug!("Land ID {} already taken, retrying", candidate);
        }

        Err(AppError::InternalError(format!(
            "No unused land ID found after {} attempts",
            LAND_ID_ATTEMPTS
        )))
    }
}

/// Generates `LND-` followed by eight uppercase alphanumerics.
fn generate_land_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..LAND_ID_LENGTH)
        .map(|_| LAND_ID_CHARSET[rng.random_range(0..LAND_ID_CHARSET.len())] as char)
        .collect();

    format!("{}{}", LAND_ID_PREFIX, suffix)
}
