//! Badge handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Badge,
    services::BadgeService,
    state::AppState,
};

use super::{request::CreateBadgeRequest, response::AwardedBadgeResponse};

/// List all badges
pub async fn list_badges(State(state): State<AppState>) -> AppResult<Json<Vec<Badge>>> {
    let badges = BadgeService::list_badges(state.db()).await?;
    Ok(Json(badges))
}

/// Badges awarded to the authenticated user
pub async fn my_badges(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<AwardedBadgeResponse>>> {
    let badges = BadgeService::list_user_badges(state.db(), &auth_user.id).await?;
    Ok(Json(badges))
}

/// Create a badge (super admin only)
pub async fn create_badge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateBadgeRequest>,
) -> AppResult<(StatusCode, Json<Badge>)> {
    if auth_user.role != roles::SUPER_ADMIN {
        return Err(AppError::Forbidden(
            "Only super admins can manage badges".to_string(),
        ));
    }
    payload.validate()?;

    let badge = BadgeService::create_badge(
        state.db(),
        &payload.name,
        payload.description.as_deref().unwrap_or_default(),
        payload.icon.as_deref().unwrap_or_default(),
        payload.color.as_deref().unwrap_or_default(),
        payload.criterion,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(badge)))
}

/// Delete a badge (super admin only)
pub async fn delete_badge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if auth_user.role != roles::SUPER_ADMIN {
        return Err(AppError::Forbidden(
            "Only super admins can manage badges".to_string(),
        ));
    }

    BadgeService::delete_badge(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
