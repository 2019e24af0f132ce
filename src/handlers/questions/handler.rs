//! Question handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{MAX_PAGE_SIZE, roles},
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    models::Question,
    services::QuestionService,
    state::AppState,
};

use super::{
    request::{CreateQuestionRequest, ListQuestionsQuery, UpdateQuestionRequest},
    response::{QuestionResponse, QuestionsListResponse},
};

fn require_super_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::SUPER_ADMIN {
        return Err(AppError::Forbidden(
            "Only super admins can manage questions".to_string(),
        ));
    }
    Ok(())
}

/// Create a new question (super admin only)
pub async fn create_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<Question>)> {
    require_super_admin(&auth_user)?;
    payload.validate()?;

    let question = QuestionService::create_question(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Update a question (super admin only)
pub async fn update_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> AppResult<Json<Question>> {
    require_super_admin(&auth_user)?;
    payload.validate()?;

    let question = QuestionService::update_question(state.db(), &id, payload).await?;

    Ok(Json(question))
}

/// Delete a question (super admin only)
pub async fn delete_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_super_admin(&auth_user)?;

    QuestionService::delete_question(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a question; browsable without authentication
pub async fn get_question(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuestionResponse>> {
    let show_hidden = auth_user.is_some_and(|u| u.role == roles::SUPER_ADMIN);

    let question = QuestionService::get_question(state.db(), &id, show_hidden).await?;

    Ok(Json(question))
}

/// List questions; browsable without authentication
pub async fn list_questions(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Query(query): Query<ListQuestionsQuery>,
) -> AppResult<Json<QuestionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);
    let show_hidden = auth_user.is_some_and(|u| u.role == roles::SUPER_ADMIN);

    let (questions, total) = QuestionService::list_questions(
        state.db(),
        page,
        per_page,
        query.difficulty.as_deref(),
        show_hidden,
    )
    .await?;

    Ok(Json(QuestionsListResponse {
        questions,
        total,
        page,
        per_page,
    }))
}
