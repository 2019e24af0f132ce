//! Question response DTOs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Question response with hidden test cases filtered out for candidates
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    /// Count across all test cases, including hidden ones
    pub total_test_cases: usize,
    pub test_cases: Vec<TestCaseResponse>,
    /// Languages this question can be solved in
    pub languages: Vec<String>,
    pub boilerplates: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Test case in a question response
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub input: String,
    pub expected_output: String,
    pub is_visible: bool,
}

/// Question list response
#[derive(Debug, Serialize)]
pub struct QuestionsListResponse {
    pub questions: Vec<QuestionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
