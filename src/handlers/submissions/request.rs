//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Question ID to submit for
    pub question_id: Uuid,

    /// Programming language
    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// User source code (merged into the question's boilerplate)
    #[validate(length(min = 1, max = 262144))] // 256KB max
    pub code: String,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub question_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: Option<String>,
}
