use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        post::{CreatePostDto, CreateReplyDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::post::{CreatePostParams, Post, UpdatePostParams},
        service::post::PostService,
        state::AppState,
    },
};

fn post_service(state: &AppState) -> PostService<'_> {
    PostService::new(&state.db, state.mailer.as_ref())
}

async fn find_post(service: &PostService<'_>, id: i32) -> Result<Post, AppError> {
    service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
}

/// GET /post - List posts with their replies, newest first
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = post_service(&state).get_all().await?;
    let posts: Vec<_> = posts.into_iter().map(Post::into_dto).collect();

    Ok((StatusCode::OK, Json(posts)))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = find_post(&post_service(&state), id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let post = post_service(&state)
        .create(user.id, CreatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// PUT /post/{id} - Edit a post (author only)
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = post_service(&state);
    let post = find_post(&service, id).await?;
    ensure(&user, &Permission::Author(post.user_id))?;

    let post = service
        .update(post.id, UpdatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// POST /post/{id}/replies - Reply to a post
///
/// The post author is emailed unless they wrote the reply themselves. A failed email
/// does not fail the request.
pub async fn create_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let reply = post_service(&state)
        .reply(id, &user, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

/// DELETE /post/{id} - Delete a post and its replies (author or admin)
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = post_service(&state);
    let post = find_post(&service, id).await?;
    ensure(&user, &Permission::OwnerOrAdmin(post.user_id))?;

    service.delete(post.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Post deleted".to_string(),
        }),
    ))
}
