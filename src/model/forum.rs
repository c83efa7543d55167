use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub question: String,
    pub category: Option<String>,
    pub answer: Option<String>,
    pub answered_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateQuestionDto {
    pub question: String,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateQuestionDto {
    pub question: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnswerDto {
    pub answer: String,
}
