//! Q&A board domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::forum::{CreateQuestionDto, ForumEntryDto, UpdateQuestionDto};

/// A question, optionally answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumEntry {
    pub id: i32,
    /// Asker.
    pub user_id: i32,
    pub question: String,
    pub category: Option<String>,
    pub answer: Option<String>,
    pub answered_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
}

impl ForumEntry {
    pub fn from_entity(entity: entity::forum_entry::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            question: entity.question,
            category: entity.category,
            answer: entity.answer,
            answered_by: entity.answered_by,
            created_at: entity.created_at,
            answered_at: entity.answered_at,
        }
    }

    pub fn into_dto(self) -> ForumEntryDto {
        ForumEntryDto {
            id: self.id,
            user_id: self.user_id,
            question: self.question,
            category: self.category,
            answer: self.answer,
            answered_by: self.answered_by,
            created_at: self.created_at,
            answered_at: self.answered_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    pub question: String,
    pub category: Option<String>,
}

impl CreateQuestionParams {
    pub fn from_dto(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            category: dto.category,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateQuestionParams {
    pub question: Option<String>,
    pub category: Option<String>,
}

impl UpdateQuestionParams {
    pub fn from_dto(dto: UpdateQuestionDto) -> Self {
        Self {
            question: dto.question,
            category: dto.category,
        }
    }
}

/// Answer recorded against a question.
#[derive(Debug, Clone)]
pub struct AnswerParams {
    pub answer: String,
    pub answered_by: i32,
}
