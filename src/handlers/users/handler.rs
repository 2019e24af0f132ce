//! User handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::User,
    services::{BadgeService, UserService},
    state::AppState,
};

use super::{
    request::{LeaderboardQuery, UpdateProfileRequest},
    response::{LeaderboardEntry, LeaderboardResponse, ProfileResponse},
};

/// Get a user's public profile with stats and badges
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserService::get_user_by_id(state.db(), &id).await?;
    let badges = BadgeService::list_user_badges(state.db(), &id).await?;
    let easy_solved = user.easy_solved();

    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role,
        points: user.points,
        questions_solved: user.questions_solved,
        easy_solved,
        medium_solved: user.medium_solved,
        hard_solved: user.hard_solved,
        streak_days: user.streak_days,
        last_active_date: user.last_active_date,
        badges,
    }))
}

/// Update the authenticated user's profile
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<User>> {
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user.id,
        &auth_user.id,
        &auth_user.role,
        payload.display_name.as_deref(),
        payload.email.as_deref(),
        payload.current_password.as_deref(),
        payload.new_password.as_deref(),
    )
    .await?;

    Ok(Json(user))
}

/// Points leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let users = UserService::leaderboard(state.db(), page, per_page).await?;

    let entries = users
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry {
            rank: (page - 1) * per_page + i as u32 + 1,
            user_id: user.id,
            username: user.username,
            points: user.points,
            questions_solved: user.questions_solved,
            streak_days: user.streak_days,
        })
        .collect();

    Ok(Json(LeaderboardResponse {
        entries,
        page,
        per_page,
    }))
}
