//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
        role: &str,
    ) -> AppResult<User> {
        // Self-registration is limited to the non-privileged roles
        if !matches!(role, roles::CANDIDATE | roles::INTERVIEWER) {
            return Err(AppError::Validation(format!("Invalid role: {}", role)));
        }

        // Check if username exists
        if UserRepository::find_by_username(pool, username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Email already registered".to_string(),
            ));
        }

        // Hash password
        let password_hash = Self::hash_password(password)?;

        // Create user
        let user =
            UserRepository::create(pool, username, email, &password_hash, display_name, role)
                .await?;

        Ok(user)
    }

    /// Login with username/email and password
    pub async fn login(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        identifier: &str,
        password: &str,
    ) -> AppResult<(User, String, String, i64)> {
        // Find user
        let user = UserRepository::find_by_identifier(pool, identifier)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Generate tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let refresh_token = crypto::generate_secure_token(48);

        // Store refresh token in Redis, keyed by its hash
        let key = format!(
            "refresh_token:{}:{}",
            user.id,
            crypto::hash_string(&refresh_token)
        );
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&key, "1", expiry as u64).await?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Refresh access token
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        // Find the refresh token in Redis (check all users)
        let pattern = format!("refresh_token:*:{}", crypto::hash_string(refresh_token));
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut redis)
            .await?;

        if keys.is_empty() {
            return Err(AppError::InvalidToken);
        }

        // Extract user_id from key
        let key = &keys[0];
        let parts: Vec<&str> = key.split(':').collect();
        if parts.len() != 3 {
            return Err(AppError::InvalidToken);
        }

        let user_id = Uuid::parse_str(parts[1]).map_err(|_| AppError::InvalidToken)?;

        // Get user
        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        // Delete old refresh token
        redis.del::<_, ()>(key).await?;

        // Generate new tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let new_refresh_token = crypto::generate_secure_token(48);

        // Store new refresh token
        let new_key = format!(
            "refresh_token:{}:{}",
            user.id,
            crypto::hash_string(&new_refresh_token)
        );
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis
            .set_ex::<_, _, ()>(&new_key, "1", expiry as u64)
            .await?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Logout (invalidate all refresh tokens for the user)
    pub async fn logout(mut redis: ConnectionManager, user_id: &Uuid) -> AppResult<()> {
        let pattern = format!("refresh_token:{}:*", user_id);
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut redis)
            .await?;

        for key in keys {
            redis.del::<_, ()>(&key).await?;
        }

        Ok(())
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}
