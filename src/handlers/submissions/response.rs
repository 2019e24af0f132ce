//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full evaluation result returned after a submission run
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub submission_id: Uuid,
    pub question_id: Uuid,
    pub status: String,
    pub points_earned: i32,
    pub passed_count: i32,
    pub failed_count: i32,
    pub total_time_ms: f64,
    pub max_memory_kb: i64,
    pub case_results: Vec<CaseResultResponse>,
}

/// Result for a single executed test case
#[derive(Debug, Serialize)]
pub struct CaseResultResponse {
    pub index: usize,
    pub status: String,
    /// Only shown for visible test cases or to super admins
    pub input: Option<String>,
    pub expected_output: Option<String>,
    pub actual_output: Option<String>,
    pub time_ms: f64,
    pub memory_kb: i64,
    pub stderr: Option<String>,
}

/// Submission summary response
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: Uuid,
    pub question_title: String,
    pub language: String,
    pub status: String,
    pub passed_count: i32,
    pub failed_count: i32,
    pub points_awarded: i32,
    pub total_time_ms: f64,
    pub max_memory_kb: i64,
    pub submitted_at: DateTime<Utc>,
}

/// Submission list response
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
