use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        forum::{AnswerDto, CreateQuestionDto, UpdateQuestionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::forum::{CreateQuestionParams, ForumEntry, UpdateQuestionParams},
        service::forum::ForumService,
        state::AppState,
    },
};

async fn find_entry(service: &ForumService<'_>, id: i32) -> Result<ForumEntry, AppError> {
    service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
}

/// GET /QandA - List every question with its answer, newest first
pub async fn get_questions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = ForumService::new(&state.db).get_all().await?;
    let entries: Vec<_> = entries.into_iter().map(ForumEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries)))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entry = find_entry(&ForumService::new(&state.db), id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// POST /QandA - Ask a question as the caller
pub async fn create_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entry = ForumService::new(&state.db)
        .create(user.id, CreateQuestionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// PUT /QandA/{id} - Edit a question
///
/// Only the asker may edit; admins get no exception.
pub async fn update_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ForumService::new(&state.db);
    let entry = find_entry(&service, id).await?;
    ensure(&user, &Permission::Author(entry.user_id))?;

    let entry = service
        .update(entry.id, UpdateQuestionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// POST /QandA/{id}/answer - Answer a question and notify the asker
///
/// # Returns
/// - `200 OK` - Entry with the answer recorded
/// - `400 Bad Request` - Empty answer
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such question
pub async fn answer_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entry = ForumService::new(&state.db)
        .answer(id, user.id, &payload.answer)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

pub async fn delete_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ForumService::new(&state.db);
    let entry = find_entry(&service, id).await?;
    ensure(&user, &Permission::OwnerOrAdmin(entry.user_id))?;

    service.delete(entry.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Question deleted".to_string(),
        }),
    ))
}
