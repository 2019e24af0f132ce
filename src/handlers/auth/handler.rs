//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::User,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RefreshTokenRequest, RegisterRequest},
    response::{
        AuthResponse, CurrentUserResponse, LogoutResponse, RefreshResponse, RegisterResponse,
        UserResponse,
    },
};

fn to_user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        display_name: user.display_name,
        role: user.role,
        created_at: user.created_at,
    }
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
        payload.display_name.as_deref(),
        &payload.role,
    )
    .await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user: to_user_response(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username/email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, access_token, refresh_token, expires_in) = AuthService::login(
        state.db(),
        state.redis(),
        state.config(),
        &payload.identifier,
        &payload.password,
    )
    .await?;

    let response = AuthResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: to_user_response(user),
    };

    Ok(Json(response))
}

/// Refresh access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let (access_token, refresh_token, expires_in) = AuthService::refresh_token(
        state.db(),
        state.redis(),
        state.config(),
        &payload.refresh_token,
    )
    .await?;

    Ok(Json(RefreshResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
    }))
}

/// Logout (invalidate refresh tokens)
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<LogoutResponse>> {
    AuthService::logout(state.redis(), &auth_user.id).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}

/// Get the currently authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = crate::services::UserService::get_user_by_id(state.db(), &auth_user.id).await?;

    Ok(Json(CurrentUserResponse {
        user: to_user_response(user),
    }))
}
