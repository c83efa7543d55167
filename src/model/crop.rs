use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropDto {
    pub id: i32,
    pub user_id: i32,
    pub crop_name: String,
    pub variety: Option<String>,
    pub planted_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub actual_harvest_date: Option<NaiveDate>,
    pub growth_status: String,
    pub health_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCropDto {
    pub crop_name: String,
    pub variety: Option<String>,
    pub planted_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub growth_status: String,
    pub health_status: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCropDto {
    pub crop_name: Option<String>,
    pub variety: Option<String>,
    pub planted_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub actual_harvest_date: Option<NaiveDate>,
    pub growth_status: Option<String>,
    pub health_status: Option<String>,
    pub notes: Option<String>,
}
