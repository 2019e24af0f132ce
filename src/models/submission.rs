//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Submission database model
///
/// Created exactly once per evaluation run and never mutated afterward.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: Uuid,
    pub language: String,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub status: String,
    pub passed_count: i32,
    pub failed_count: i32,
    pub points_awarded: i32,
    pub total_time_ms: f64,
    pub max_memory_kb: i64,
    /// Ordered per-test-case results, stored as a JSONB document
    pub case_results: Json<Vec<CaseResult>>,
    pub submitted_at: DateTime<Utc>,
}

/// Outcome of one executed test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub status: String,
    pub time_ms: f64,
    pub memory_kb: i64,
    pub stderr: Option<String>,
}

/// Aggregate submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    /// Result polling exhausted while the engine still reported queued/processing
    Timeout,
    InternalError,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::CompilationError => "Compilation Error",
            Self::RuntimeError => "Runtime Error",
            Self::Timeout => "Timeout",
            Self::InternalError => "Internal Error",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Accepted" => Some(Self::Accepted),
            "Wrong Answer" => Some(Self::WrongAnswer),
            "Time Limit Exceeded" => Some(Self::TimeLimitExceeded),
            "Compilation Error" => Some(Self::CompilationError),
            "Runtime Error" => Some(Self::RuntimeError),
            "Timeout" => Some(Self::Timeout),
            "Internal Error" => Some(Self::InternalError),
            _ => None,
        }
    }

    /// Check if this status means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            SubmissionStatus::Accepted,
            SubmissionStatus::WrongAnswer,
            SubmissionStatus::TimeLimitExceeded,
            SubmissionStatus::CompilationError,
            SubmissionStatus::RuntimeError,
            SubmissionStatus::Timeout,
            SubmissionStatus::InternalError,
        ] {
            assert_eq!(SubmissionStatus::from_str(status.as_str()), Some(status));
        }
        assert!(SubmissionStatus::from_str("Pending").is_none());
    }

    #[test]
    fn test_is_accepted() {
        assert!(SubmissionStatus::Accepted.is_accepted());
        assert!(!SubmissionStatus::WrongAnswer.is_accepted());
        assert!(!SubmissionStatus::Timeout.is_accepted());
    }
}
