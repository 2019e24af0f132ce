//! Scoring and gamification engine
//!
//! Runs after an accepted submission has been durably recorded: updates the
//! user's points, solved-question counters and daily streak, then
//! re-evaluates every badge criterion. The stat fields on the user row are
//! denormalized caches of the submission history; `recompute` rebuilds them
//! from that history and is the reconciliation entry point.

use std::collections::HashSet;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BadgeRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Badge, Difficulty, Question, User, UserStats},
    utils::time::{is_day_before, today_utc},
};

/// Scoring service for points, streaks and badges
pub struct ScoringService;

impl ScoringService {
    /// Daily streak transition
    ///
    /// Solving on consecutive calendar days extends the streak; a gap resets
    /// it to 1; further solves on the same day leave it unchanged.
    pub fn next_streak(
        last_active: Option<NaiveDate>,
        current_days: i32,
        today: NaiveDate,
    ) -> i32 {
        match last_active {
            Some(date) if is_day_before(date, today) => current_days + 1,
            Some(date) if date == today => current_days,
            _ => 1,
        }
    }

    /// Apply the incremental scoring update for an accepted submission
    ///
    /// Points and difficulty counters are incremented per accepted
    /// submission, including re-solves of the same question; only the
    /// distinct-solved total is deduplicated here. `recompute` is the
    /// deduplicating source of truth for the rest.
    pub async fn apply_accepted(
        pool: &PgPool,
        user_id: &Uuid,
        question: &Question,
    ) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let difficulty = Difficulty::from_str(&question.difficulty).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Question {} has unknown difficulty {}",
                question.id,
                question.difficulty
            ))
        })?;

        let today = today_utc();
        let streak_days = Self::next_streak(user.last_active_date, user.streak_days, today);

        let (medium_delta, hard_delta) = match difficulty {
            Difficulty::Easy => (0, 0),
            Difficulty::Medium => (1, 0),
            Difficulty::Hard => (0, 1),
        };

        // The submission under evaluation is already recorded, so a count of
        // one means this is the first solve of the question
        let accepted_count =
            SubmissionRepository::count_accepted_for_question(pool, user_id, &question.id).await?;
        let solved_delta = if accepted_count <= 1 { 1 } else { 0 };

        let user = UserRepository::apply_score_update(
            pool,
            user_id,
            difficulty.points(),
            solved_delta,
            medium_delta,
            hard_delta,
            streak_days,
            today,
        )
        .await?;

        Self::evaluate_badges(pool, &user).await?;

        Ok(user)
    }

    /// Re-evaluate all badge criteria against the user's current stats
    ///
    /// Awards are idempotent: the unique (user, badge) pair makes re-running
    /// this a no-op for badges already earned.
    pub async fn evaluate_badges(pool: &PgPool, user: &User) -> AppResult<()> {
        let badges = BadgeRepository::list_all(pool).await?;
        let owned: HashSet<Uuid> = BadgeRepository::awarded_ids(pool, &user.id)
            .await?
            .into_iter()
            .collect();

        let stats = user.stats();
        for badge in Self::newly_satisfied(&badges, &stats, &owned) {
            if BadgeRepository::award(pool, &user.id, &badge.id).await? {
                tracing::info!(user_id = %user.id, badge = %badge.name, "Badge awarded");
            }
        }

        Ok(())
    }

    /// Badges whose criterion is met and which the user does not hold yet
    pub fn newly_satisfied<'a>(
        badges: &'a [Badge],
        stats: &UserStats,
        owned: &HashSet<Uuid>,
    ) -> Vec<&'a Badge> {
        badges
            .iter()
            .filter(|badge| !owned.contains(&badge.id) && badge.criterion.is_met(stats))
            .collect()
    }

    /// Rebuild a user's cached stats from the submission history
    ///
    /// Accepted submissions deduplicated by question, scored through the
    /// same difficulty -> points table as the incremental path.
    pub async fn recompute(pool: &PgPool, user_id: &Uuid) -> AppResult<User> {
        let solved = SubmissionRepository::solved_questions(pool, user_id).await?;

        let mut points = 0i32;
        let mut medium_solved = 0i32;
        let mut hard_solved = 0i32;
        for row in &solved {
            if let Some(difficulty) = Difficulty::from_str(&row.difficulty) {
                points += difficulty.points();
                match difficulty {
                    Difficulty::Easy => {}
                    Difficulty::Medium => medium_solved += 1,
                    Difficulty::Hard => hard_solved += 1,
                }
            }
        }

        let user = UserRepository::overwrite_stats(
            pool,
            user_id,
            points,
            solved.len() as i32,
            medium_solved,
            hard_solved,
        )
        .await?;

        Self::evaluate_badges(pool, &user).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BadgeCriterion;
    use sqlx::types::Json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_streak_extends_after_yesterday() {
        let today = date(2024, 3, 15);
        assert_eq!(
            ScoringService::next_streak(Some(date(2024, 3, 14)), 4, today),
            5
        );
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let today = date(2024, 3, 15);
        assert_eq!(
            ScoringService::next_streak(Some(date(2024, 3, 12)), 9, today),
            1
        );
        assert_eq!(ScoringService::next_streak(None, 0, today), 1);
    }

    #[test]
    fn test_streak_unchanged_same_day() {
        let today = date(2024, 3, 15);
        assert_eq!(ScoringService::next_streak(Some(today), 3, today), 3);
    }

    fn badge(name: &str, criterion: BadgeCriterion) -> Badge {
        Badge {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            criterion: Json(criterion),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_newly_satisfied_skips_owned() {
        let badges = vec![
            badge("century", BadgeCriterion::Points { value: 100 }),
            badge("first-steps", BadgeCriterion::TotalProblems { value: 1 }),
        ];
        let stats = UserStats {
            points: 120,
            streak_days: 0,
            questions_solved: 3,
            medium_solved: 0,
            hard_solved: 0,
        };

        let mut owned = HashSet::new();
        let first = ScoringService::newly_satisfied(&badges, &stats, &owned);
        assert_eq!(first.len(), 2);

        // Awarding makes a second evaluation a no-op
        for b in &first {
            owned.insert(b.id);
        }
        let second = ScoringService::newly_satisfied(&badges, &stats, &owned);
        assert!(second.is_empty());
    }

    #[test]
    fn test_newly_satisfied_respects_thresholds() {
        let badges = vec![badge("week", BadgeCriterion::Streak { value: 7 })];
        let mut stats = UserStats {
            points: 0,
            streak_days: 6,
            questions_solved: 0,
            medium_solved: 0,
            hard_solved: 0,
        };

        assert!(ScoringService::newly_satisfied(&badges, &stats, &HashSet::new()).is_empty());
        stats.streak_days = 7;
        assert_eq!(
            ScoringService::newly_satisfied(&badges, &stats, &HashSet::new()).len(),
            1
        );
    }
}
