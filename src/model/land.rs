use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LandDto {
    pub id: i32,
    /// Generated external identifier, e.g. `LND-7K2M9QXA`.
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

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLandDto {
    pub name: String,
    pub location: String,
    pub district: String,
    pub size_acres: f64,
    pub soil_type: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLandDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub district: Option<String>,
    pub size_acres: Option<f64>,
    pub soil_type: Option<String>,
}
