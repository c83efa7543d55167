//! Forum post repository.
//!
//! Posts are always loaded together with their replies, oldest reply first.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::post::{CreatePostParams, Post, Reply, UpdatePostParams},
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, params: CreatePostParams) -> Result<Post, AppError> {
        let entity = entity::post::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity, Vec::new()))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        let Some(entity) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let replies = self.replies_for(id).await?;

        Ok(Some(Post::from_entity(entity, replies)))
    }

    /// Lists all posts newest first, each with its replies.
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        let posts = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let mut replies_by_post: HashMap<i32, Vec<entity::post_reply::Model>> = HashMap::new();
        for reply in entity::prelude::PostReply::find()
            .filter(entity::post_reply::Column::PostId.is_in(post_ids))
            .order_by_asc(entity::post_reply::Column::CreatedAt)
            .order_by_asc(entity::post_reply::Column::Id)
            .all(self.db)
            .await?
        {
            replies_by_post.entry(reply.post_id).or_default().push(reply);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let replies = replies_by_post.remove(&post.id).unwrap_or_default();
                Post::from_entity(post, replies)
            })
            .collect())
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Post, AppError> {
        let entity = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Post with id {} not found", id)))?;

        let mut active_model: entity::post::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        let entity = active_model.update(self.db).await?;

        let replies = self.replies_for(id).await?;

        Ok(Post::from_entity(entity, replies))
    }

    pub async fn add_reply(
        &self,
        post_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<Reply, AppError> {
        let entity = entity::post_reply::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reply::from_entity(entity))
    }

    /// Deletes a post together with its replies.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::PostReply::delete_many()
            .filter(entity::post_reply::Column::PostId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Post::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn replies_for(&self, post_id: i32) -> Result<Vec<entity::post_reply::Model>, DbErr> {
        entity::prelude::PostReply::find()
            .filter(entity::post_reply::Column::PostId.eq(post_id))
            .order_by_asc(entity::post_reply::Column::CreatedAt)
            .order_by_asc(entity::post_reply::Column::Id)
            .all(self.db)
            .await
    }
}
