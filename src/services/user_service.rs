//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search, role).await
    }

    /// Leaderboard page ordered by points
    pub async fn leaderboard(pool: &PgPool, page: u32, per_page: u32) -> AppResult<Vec<User>> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::leaderboard(pool, offset, limit).await
    }

    /// Update user profile
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        target_id: &Uuid,
        requester_role: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        // Check permissions
        if requester_id != target_id && requester_role != roles::SUPER_ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        // If changing password, verify current password
        let password_hash = if let Some(new_pwd) = new_password {
            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            let user = Self::get_user_by_id(pool, target_id).await?;
            if !AuthService::verify_password(current_pwd, &user.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }

            Some(AuthService::hash_password(new_pwd)?)
        } else {
            None
        };

        UserRepository::update(pool, target_id, email, display_name, password_hash.as_deref())
            .await
    }

    /// Update a user's role
    pub async fn update_role(pool: &PgPool, id: &Uuid, role: &str) -> AppResult<User> {
        if !roles::ALL.contains(&role) {
            return Err(AppError::Validation(format!("Invalid role: {}", role)));
        }

        Self::get_user_by_id(pool, id).await?;
        UserRepository::update_role(pool, id, role).await
    }

    /// Delete a user
    pub async fn delete_user(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_user_by_id(pool, id).await?;
        UserRepository::delete(pool, id).await
    }
}
