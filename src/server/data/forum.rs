use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::forum::{AnswerParams, CreateQuestionParams, ForumEntry, UpdateQuestionParams},
};

/// Repository for Q&A board entries.
pub struct ForumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        params: CreateQuestionParams,
    ) -> Result<ForumEntry, AppError> {
        let entity = entity::forum_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            question: ActiveValue::Set(params.question),
            category: ActiveValue::Set(params.category),
            answer: ActiveValue::Set(None),
            answered_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            answered_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ForumEntry::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ForumEntry>, AppError> {
        let entity = entity::prelude::ForumEntry::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ForumEntry::from_entity))
    }

    /// Lists all questions, newest first.
    pub async fn get_all(&self) -> Result<Vec<ForumEntry>, AppError> {
        let entities = entity::prelude::ForumEntry::find()
            .order_by_desc(entity::forum_entry::Column::CreatedAt)
            .order_by_desc(entity::forum_entry::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ForumEntry::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateQuestionParams,
    ) -> Result<ForumEntry, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        if let Some(question) = params.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(Some(category));
        }

        Ok(ForumEntry::from_entity(active_model.update(self.db).await?))
    }

    /// Records an answer, replacing any previous one.
    pub async fn set_answer(&self, id: i32, params: AnswerParams) -> Result<ForumEntry, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.answer = ActiveValue::Set(Some(params.answer));
        active_model.answered_by = ActiveValue::Set(Some(params.answered_by));
        active_model.answered_at = ActiveValue::Set(Some(Utc::now()));

        Ok(ForumEntry::from_entity(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ForumEntry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::forum_entry::ActiveModel, AppError> {
        let entity = entity::prelude::ForumEntry::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Question with id {} not found",
                id
            )))?;

        Ok(entity.into())
    }
}
