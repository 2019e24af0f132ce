//! Submission handler implementations

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
    middleware::auth::AuthenticatedUser,
    models::Submission,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, ListSubmissionsQuery},
    response::{EvaluationResponse, SubmissionsListResponse},
};

/// Submit code for a question and evaluate it against the test cases
///
/// Runs the whole workflow inline: the response carries the aggregate
/// status, per-case breakdown and points earned.
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<EvaluationResponse>)> {
    payload.validate()?;

    let show_hidden = auth_user.role == roles::SUPER_ADMIN;

    let evaluation = SubmissionService::evaluate(
        state.db(),
        state.executor(),
        &auth_user.id,
        payload,
        show_hidden,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// List submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    // Regular users can only see their own submissions
    let filter_user_id = if auth_user.role == roles::SUPER_ADMIN {
        query.user_id
    } else {
        Some(auth_user.id)
    };

    let (submissions, total) = SubmissionService::list_submissions(
        state.db(),
        page,
        per_page,
        filter_user_id.as_ref(),
        query.question_id.as_ref(),
        query.status.as_deref(),
    )
    .await?;

    Ok(Json(SubmissionsListResponse {
        submissions,
        total,
        page,
        per_page,
    }))
}

/// Get a specific submission
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionService::get_submission(state.db(), &id).await?;

    // Users can only view their own submissions (unless super admin)
    if submission.user_id != auth_user.id && auth_user.role != roles::SUPER_ADMIN {
        return Err(AppError::Forbidden(
            "Cannot view other users' submissions".to_string(),
        ));
    }

    Ok(Json(submission))
}
