//! Q&A board service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{forum::ForumRepository, notification::NotificationRepository},
    error::AppError,
    model::{
        forum::{AnswerParams, CreateQuestionParams, ForumEntry, UpdateQuestionParams},
        notification::CreateNotificationParams,
    },
    util::validate::{optional_text, require_text},
};

pub struct ForumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        params: CreateQuestionParams,
    ) -> Result<ForumEntry, AppError> {
        let question = require_text("question", &params.question)?;

        ForumRepository::new(self.db)
            .create(
                user_id,
                CreateQuestionParams {
                    question,
                    category: optional_text(params.category),
                },
            )
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ForumEntry>, AppError> {
        ForumRepository::new(self.db).find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<ForumEntry>, AppError> {
        ForumRepository::new(self.db).get_all().await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateQuestionParams,
    ) -> Result<ForumEntry, AppError> {
        let question = params
            .question
            .map(|question| require_text("question", &question))
            .transpose()?;

        ForumRepository::new(self.db)
            .update(
                id,
                UpdateQuestionParams {
                    question,
                    category: optional_text(params.category),
                },
            )
            .await
    }

    /// Records an answer and notifies the asker.
    ///
    /// The notification is addressed to the asker's user ID. Failing to write it is
    /// logged and does not fail the answer.
    ///
    /// # Returns
    /// - `Ok(ForumEntry)` - Entry with answer, answerer and answer timestamp set
    /// - `Err(AppError::NotFound)` - No entry with that ID
    /// - `Err(AppError::BadRequest)` - Empty answer
    pub async fn answer(
        &self,
        id: i32,
        answered_by: i32,
        answer: &str,
    ) -> Result<ForumEntry, AppError> {
        let answer = require_text("answer", answer)?;

        let repo = ForumRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(question_not_found(id));
        }

        let entry = repo
            .set_answer(
                id,
                AnswerParams {
                    answer,
                    answered_by,
                },
            )
            .await?;

        let notification = CreateNotificationParams::new(
            entry.user_id.to_string(),
            format!("Your question #{} has been answered.", entry.id),
        );
        if let Err(e) = NotificationRepository::new(self.db)
            .create(notification)
            .await
        {
            tracing::warn!("Failed to notify asker of question {}: {}", entry.id, e);
        }

        Ok(entry)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ForumRepository::new(self.db).delete(id).await? {
            return Err(question_not_found(id));
        }
        Ok(())
    }
}

fn question_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Question {} not found", id))
}
