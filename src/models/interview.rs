//! Mock-interview models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mock interview scheduled by an interviewer
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub interviewer_id: Uuid,
    pub title: String,
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

/// A candidate's application to a mock interview
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InterviewApplication {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub candidate_id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Interview application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
