//! Badge and badge-award models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::user::UserStats;

/// Badge database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub criterion: Json<BadgeCriterion>,
    pub created_at: DateTime<Utc>,
}

/// Award criterion for a badge
///
/// All criteria compare with greater-or-equal against the user's current
/// aggregate stats. Criteria are monotonic in the tracked stats, so a badge
/// once earned stays earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BadgeCriterion {
    /// Cumulative points reached the threshold
    Points { value: i32 },
    /// Daily streak reached the threshold
    Streak { value: i32 },
    /// Total distinct questions solved reached the threshold
    TotalProblems { value: i32 },
    /// At least one question of the named difficulty solved
    Difficulty { value: String },
}

impl BadgeCriterion {
    /// Evaluate the criterion against a stats snapshot
    pub fn is_met(&self, stats: &UserStats) -> bool {
        match self {
            Self::Points { value } => stats.points >= *value,
            Self::Streak { value } => stats.streak_days >= *value,
            Self::TotalProblems { value } => stats.questions_solved >= *value,
            Self::Difficulty { value } => stats.has_solved_difficulty(value),
        }
    }
}

/// Join entity recording one badge award, at most one per (user, badge)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserBadge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub badge_id: Uuid,
    pub awarded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(points: i32, streak: i32, solved: i32, medium: i32, hard: i32) -> UserStats {
        UserStats {
            points,
            streak_days: streak,
            questions_solved: solved,
            medium_solved: medium,
            hard_solved: hard,
        }
    }

    #[test]
    fn test_points_criterion() {
        let c = BadgeCriterion::Points { value: 100 };
        assert!(!c.is_met(&stats(99, 0, 0, 0, 0)));
        assert!(c.is_met(&stats(100, 0, 0, 0, 0)));
        assert!(c.is_met(&stats(150, 0, 0, 0, 0)));
    }

    #[test]
    fn test_streak_criterion() {
        let c = BadgeCriterion::Streak { value: 7 };
        assert!(!c.is_met(&stats(0, 6, 0, 0, 0)));
        assert!(c.is_met(&stats(0, 7, 0, 0, 0)));
    }

    #[test]
    fn test_total_problems_criterion() {
        let c = BadgeCriterion::TotalProblems { value: 10 };
        assert!(!c.is_met(&stats(0, 0, 9, 0, 0)));
        assert!(c.is_met(&stats(0, 0, 10, 3, 2)));
    }

    #[test]
    fn test_difficulty_criterion() {
        let hard = BadgeCriterion::Difficulty {
            value: "hard".to_string(),
        };
        assert!(!hard.is_met(&stats(0, 0, 5, 5, 0)));
        assert!(hard.is_met(&stats(0, 0, 5, 4, 1)));

        // Easy is implied by total minus medium minus hard
        let easy = BadgeCriterion::Difficulty {
            value: "easy".to_string(),
        };
        assert!(!easy.is_met(&stats(0, 0, 2, 1, 1)));
        assert!(easy.is_met(&stats(0, 0, 3, 1, 1)));
    }

    #[test]
    fn test_criterion_serde_shape() {
        let c: BadgeCriterion = serde_json::from_value(serde_json::json!({
            "type": "points",
            "value": 50
        }))
        .unwrap();
        assert_eq!(c, BadgeCriterion::Points { value: 50 });

        let c: BadgeCriterion = serde_json::from_value(serde_json::json!({
            "type": "difficulty",
            "value": "medium"
        }))
        .unwrap();
        assert_eq!(
            c,
            BadgeCriterion::Difficulty {
                value: "medium".to_string()
            }
        );
    }
}
