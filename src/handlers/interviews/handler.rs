//! Mock-interview handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{ApplicationStatus, Interview, InterviewApplication},
    services::InterviewService,
    state::AppState,
};

use super::{
    request::{CreateInterviewRequest, DecideApplicationRequest, ListInterviewsQuery},
    response::InterviewWithApplications,
};

/// Schedule a new mock interview (interviewer role)
pub async fn create_interview(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateInterviewRequest>,
) -> AppResult<(StatusCode, Json<Interview>)> {
    payload.validate()?;

    let interview = InterviewService::create_interview(
        state.db(),
        &auth_user.id,
        &payload.title,
        payload.description.as_deref().unwrap_or_default(),
        payload.scheduled_at,
        payload.duration_minutes.unwrap_or(60),
        payload.capacity.unwrap_or(1),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(interview)))
}

/// List upcoming interviews
pub async fn list_interviews(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListInterviewsQuery>,
) -> AppResult<Json<Vec<Interview>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let interviews = InterviewService::list_upcoming(state.db(), page, per_page).await?;

    Ok(Json(interviews))
}

/// Get one interview
pub async fn get_interview(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Interview>> {
    let interview = InterviewService::get_interview(state.db(), &id).await?;

    Ok(Json(interview))
}

/// The requesting interviewer's interviews with their applications
pub async fn my_interviews(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<InterviewWithApplications>>> {
    let interviews = InterviewService::list_mine(state.db(), &auth_user.id).await?;

    Ok(Json(
        interviews
            .into_iter()
            .map(|(interview, applications)| InterviewWithApplications {
                interview,
                applications,
            })
            .collect(),
    ))
}

/// Apply to an interview as a candidate
pub async fn apply(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<InterviewApplication>)> {
    let application = InterviewService::apply(state.db(), &id, &auth_user.id).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Accept or reject an application (scheduling interviewer only)
pub async fn decide_application(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, application_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<DecideApplicationRequest>,
) -> AppResult<Json<InterviewApplication>> {
    let decision = ApplicationStatus::from_str(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("Invalid status: {}", payload.status)))?;

    let application = InterviewService::decide_application(
        state.db(),
        &id,
        &application_id,
        &auth_user.id,
        &auth_user.role,
        decision,
    )
    .await?;

    Ok(Json(application))
}
