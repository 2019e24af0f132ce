//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    constants::{MAX_PAGE_SIZE, roles},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::User,
    services::{AdminService, UserService},
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UpdateRoleRequest},
    response::{PlatformStatsResponse, RecomputeResponse, UsersListResponse},
};

fn require_super_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::SUPER_ADMIN {
        return Err(AppError::Forbidden(
            "Super admin privileges required".to_string(),
        ));
    }
    Ok(())
}

/// Aggregate platform statistics
pub async fn platform_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PlatformStatsResponse>> {
    require_super_admin(&auth_user)?;

    let stats = AdminService::platform_stats(state.db()).await?;

    Ok(Json(stats))
}

/// List users
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    require_super_admin(&auth_user)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(UsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Update a user's role
pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<Json<User>> {
    require_super_admin(&auth_user)?;

    let user = UserService::update_role(state.db(), &id, &payload.role).await?;

    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_super_admin(&auth_user)?;

    if id == auth_user.id {
        return Err(AppError::Validation(
            "Cannot delete your own account".to_string(),
        ));
    }

    UserService::delete_user(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Recompute one user's cached stats from the submission history
pub async fn recompute_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RecomputeResponse>> {
    require_super_admin(&auth_user)?;

    AdminService::recompute_user(state.db(), &id).await?;

    Ok(Json(RecomputeResponse {
        message: "User stats recomputed".to_string(),
        users_processed: 1,
    }))
}

/// Recompute cached stats for all users
pub async fn recompute_all(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<RecomputeResponse>> {
    require_super_admin(&auth_user)?;

    let users_processed = AdminService::recompute_all(state.db()).await?;

    Ok(Json(RecomputeResponse {
        message: "Stat reconciliation complete".to_string(),
        users_processed,
    }))
}
