//! Mock-interview request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Create interview request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInterviewRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(max = 65535))]
    pub description: Option<String>,

    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: Option<i32>,

    #[validate(range(min = 1, max = 100))]
    pub capacity: Option<i32>,
}

/// Application decision request
#[derive(Debug, Deserialize)]
pub struct DecideApplicationRequest {
    /// accepted or rejected
    pub status: String,
}

/// List interviews query parameters
#[derive(Debug, Deserialize)]
pub struct ListInterviewsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
