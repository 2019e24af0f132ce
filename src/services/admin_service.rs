//! Admin service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::statuses,
    db::repositories::{QuestionRepository, SubmissionRepository, UserRepository},
    error::AppResult,
    handlers::admin::response::PlatformStatsResponse,
    services::ScoringService,
};

/// Admin service for platform management
pub struct AdminService;

impl AdminService {
    /// Aggregate platform statistics
    pub async fn platform_stats(pool: &PgPool) -> AppResult<PlatformStatsResponse> {
        let total_users = UserRepository::count(pool).await?;
        let total_questions = QuestionRepository::count(pool).await?;
        let total_submissions = SubmissionRepository::count(pool).await?;
        let accepted_submissions =
            SubmissionRepository::count_by_status(pool, statuses::ACCEPTED).await?;

        Ok(PlatformStatsResponse {
            total_users,
            total_questions,
            total_submissions,
            accepted_submissions,
        })
    }

    /// Recompute one user's cached stats from the submission history
    pub async fn recompute_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        ScoringService::recompute(pool, user_id).await?;
        Ok(())
    }

    /// Recompute cached stats for every user; returns the number processed
    pub async fn recompute_all(pool: &PgPool) -> AppResult<u64> {
        let ids = UserRepository::all_ids(pool).await?;
        let mut processed = 0u64;

        for id in ids {
            match ScoringService::recompute(pool, &id).await {
                Ok(_) => processed += 1,
                Err(e) => {
                    tracing::error!(user_id = %id, error = %e, "Stat reconciliation failed");
                }
            }
        }

        Ok(processed)
    }
}
