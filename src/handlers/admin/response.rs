//! Admin response DTOs

use serde::Serialize;

use crate::models::User;

/// Aggregate platform statistics
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub total_users: i64,
    pub total_questions: i64,
    pub total_submissions: i64,
    pub accepted_submissions: i64,
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<User>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Reconciliation run response
#[derive(Debug, Serialize)]
pub struct RecomputeResponse {
    pub message: String,
    pub users_processed: u64,
}
