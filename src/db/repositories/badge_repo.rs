//! Badge repository

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Badge, BadgeCriterion, UserBadge},
};

/// Repository for badge database operations
pub struct BadgeRepository;

impl BadgeRepository {
    /// Create a new badge
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        icon: &str,
        color: &str,
        criterion: &BadgeCriterion,
    ) -> AppResult<Badge> {
        let badge = sqlx::query_as::<_, Badge>(
            r#"
            INSERT INTO badges (name, description, icon, color, criterion)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(icon)
        .bind(color)
        .bind(Json(criterion))
        .fetch_one(pool)
        .await?;

        Ok(badge)
    }

    /// Find badge by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Badge>> {
        let badge = sqlx::query_as::<_, Badge>(r#"SELECT * FROM badges WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(badge)
    }

    /// List all badges
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Badge>> {
        let badges = sqlx::query_as::<_, Badge>(r#"SELECT * FROM badges ORDER BY created_at"#)
            .fetch_all(pool)
            .await?;

        Ok(badges)
    }

    /// Delete a badge
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM badges WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Award a badge to a user; no-op if already awarded
    ///
    /// Returns true when a new award row was inserted.
    pub async fn award(pool: &PgPool, user_id: &Uuid, badge_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_badges (user_id, badge_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, badge_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(badge_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Badge IDs already awarded to a user
    pub async fn awarded_ids(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar(r#"SELECT badge_id FROM user_badges WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_all(pool)
                .await?;

        Ok(ids)
    }

    /// Awards for a user, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<UserBadge>> {
        let awards = sqlx::query_as::<_, UserBadge>(
            r#"SELECT * FROM user_badges WHERE user_id = $1 ORDER BY awarded_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(awards)
    }
}
