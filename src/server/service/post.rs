//! Forum post service.
//!
//! Posts carry their replies. Replying to someone else's post emails the author a
//! notice; a failed notice is logged and the reply is kept.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        post::{CreatePostParams, Post, Reply, UpdatePostParams},
        user::User,
    },
    service::mail::{Email, Mailer},
    util::validate::require_text,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    pub async fn create(&self, user_id: i32, params: CreatePostParams) -> Result<Post, AppError> {
        let title = require_text("title", &params.title)?;
        let content = require_text("content", &params.content)?;

        PostRepository::new(self.db)
            .create(user_id, CreatePostParams { title, content })
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        PostRepository::new(self.db).find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        PostRepository::new(self.db).get_all().await
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Post, AppError> {
        let title = params
            .title
            .map(|title| require_text("title", &title))
            .transpose()?;
        let content = params
            .content
            .map(|content| require_text("content", &content))
            .transpose()?;

        PostRepository::new(self.db)
            .update(id, UpdatePostParams { title, content })
            .await
    }

    /// Adds a reply from `author` and emails the post's author about it.
    ///
    /// # Returns
    /// - `Ok(Reply)` - Stored reply
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::BadRequest)` - Empty reply
    pub async fn reply(&self, post_id: i32, author: &User, content: &str) -> Result<Reply, AppError> {
        let content = require_text("content", content)?;

        let repo = PostRepository::new(self.db);
        let Some(post) = repo.find_by_id(post_id).await? else {
            return Err(post_not_found(post_id));
        };

        let reply = repo.add_reply(post.id, author.id, content).await?;

        if post.user_id != author.id {
            self.send_reply_notice(&post, author, &reply).await;
        }

        Ok(reply)
    }

    /// Deletes a post together with its replies.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(post_not_found(id));
        }
        Ok(())
    }

    async fn send_reply_notice(&self, post: &Post, replier: &User, reply: &Reply) {
        let post_author = match UserRepository::new(self.db).find_by_id(post.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!("Author {} of post {} no longer exists", post.user_id, post.id);
                return;
            }
            Err(e) => {
                tracing::warn!("Failed to load author of post {}: {}", post.id, e);
                return;
            }
        };

        let email = Email {
            to: post_author.email,
            subject: format!("New reply to \"{}\"", post.title),
            body: format!(
                "Hello {},\n\n{} replied to your post \"{}\":\n\n{}\n\nAgroSphere",
                post_author.full_name, replier.username, post.title, reply.content
            ),
            attachment: None,
        };

        match self.mailer.send(email).await {
            Ok(()) => tracing::info!("Sent reply notice for post {}", post.id),
            Err(e) => tracing::warn!("Failed to send reply notice for post {}: {}", post.id, e),
        }
    }
}

fn post_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}
