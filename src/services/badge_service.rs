//! Badge service

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::BadgeRepository,
    error::{AppError, AppResult},
    handlers::badges::response::AwardedBadgeResponse,
    models::{Badge, BadgeCriterion, Difficulty},
};

/// Badge service for business logic
pub struct BadgeService;

impl BadgeService {
    /// Create a new badge
    pub async fn create_badge(
        pool: &PgPool,
        name: &str,
        description: &str,
        icon: &str,
        color: &str,
        criterion: BadgeCriterion,
    ) -> AppResult<Badge> {
        Self::validate_criterion(&criterion)?;
        BadgeRepository::create(pool, name, description, icon, color, &criterion).await
    }

    /// Delete a badge
    pub async fn delete_badge(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        BadgeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Badge not found".to_string()))?;

        BadgeRepository::delete(pool, id).await
    }

    /// List all badges
    pub async fn list_badges(pool: &PgPool) -> AppResult<Vec<Badge>> {
        BadgeRepository::list_all(pool).await
    }

    /// Badges awarded to a user, with award timestamps
    pub async fn list_user_badges(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<AwardedBadgeResponse>> {
        let awards = BadgeRepository::list_for_user(pool, user_id).await?;
        let badges: HashMap<Uuid, Badge> = BadgeRepository::list_all(pool)
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        Ok(awards
            .into_iter()
            .filter_map(|award| {
                badges.get(&award.badge_id).map(|badge| AwardedBadgeResponse {
                    badge_id: badge.id,
                    name: badge.name.clone(),
                    description: badge.description.clone(),
                    icon: badge.icon.clone(),
                    color: badge.color.clone(),
                    awarded_at: award.awarded_at,
                })
            })
            .collect())
    }

    fn validate_criterion(criterion: &BadgeCriterion) -> AppResult<()> {
        match criterion {
            BadgeCriterion::Points { value }
            | BadgeCriterion::Streak { value }
            | BadgeCriterion::TotalProblems { value } => {
                if *value <= 0 {
                    return Err(AppError::Validation(
                        "Badge criterion value must be positive".to_string(),
                    ));
                }
            }
            BadgeCriterion::Difficulty { value } => {
                if Difficulty::from_str(value).is_none() {
                    return Err(AppError::Validation(format!(
                        "Invalid difficulty in badge criterion: {}",
                        value
                    )));
                }
            }
        }

        Ok(())
    }
}
