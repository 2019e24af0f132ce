//! User response DTOs

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Public profile with gamification stats
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub points: i32,
    pub questions_solved: i32,
    pub easy_solved: i32,
    pub medium_solved: i32,
    pub hard_solved: i32,
    pub streak_days: i32,
    pub last_active_date: Option<NaiveDate>,
    pub badges: Vec<crate::handlers::badges::response::AwardedBadgeResponse>,
}

/// One leaderboard row
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: Uuid,
    pub username: String,
    pub points: i32,
    pub questions_solved: i32,
    pub streak_days: i32,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    pub page: u32,
    pub per_page: u32,
}
