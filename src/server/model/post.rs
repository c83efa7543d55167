//! Forum post and reply domain models.

use chrono::{DateTime, Utc};

use crate::model::post::{CreatePostDto, PostDto, ReplyDto, UpdatePostDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn from_entity(entity: entity::post_reply::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            post_id: self.post_id,
            user_id: self.user_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Post with its replies, oldest reply first.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    /// Author.
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model, replies: Vec<entity::post_reply::Model>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            replies: replies.into_iter().map(Reply::from_entity).collect(),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            replies: self.replies.into_iter().map(Reply::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub content: String,
}

impl CreatePostParams {
    pub fn from_dto(dto: CreatePostDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}
