//! User model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
    pub points: i32,
    pub questions_solved: i32,
    pub medium_solved: i32,
    pub hard_solved: i32,
    pub streak_days: i32,
    pub last_active_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has super admin privileges
    pub fn is_super_admin(&self) -> bool {
        self.role == roles::SUPER_ADMIN
    }

    /// Check if user can schedule mock interviews
    pub fn can_schedule_interviews(&self) -> bool {
        matches!(self.role.as_str(), roles::INTERVIEWER | roles::SUPER_ADMIN)
    }

    /// Number of solved easy questions, implied by the explicit counters
    pub fn easy_solved(&self) -> i32 {
        (self.questions_solved - self.medium_solved - self.hard_solved).max(0)
    }

    /// Snapshot of the aggregate stats used for badge evaluation
    pub fn stats(&self) -> UserStats {
        UserStats {
            points: self.points,
            streak_days: self.streak_days,
            questions_solved: self.questions_solved,
            medium_solved: self.medium_solved,
            hard_solved: self.hard_solved,
        }
    }
}

/// Aggregate user stats badge criteria are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub points: i32,
    pub streak_days: i32,
    pub questions_solved: i32,
    pub medium_solved: i32,
    pub hard_solved: i32,
}

impl UserStats {
    /// Whether the user has solved at least one question of the difficulty
    pub fn has_solved_difficulty(&self, difficulty: &str) -> bool {
        match difficulty {
            crate::constants::difficulties::EASY => {
                self.questions_solved - self.medium_solved - self.hard_solved > 0
            }
            crate::constants::difficulties::MEDIUM => self.medium_solved > 0,
            crate::constants::difficulties::HARD => self.hard_solved > 0,
            _ => false,
        }
    }
}
