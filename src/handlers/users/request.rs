//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Profile update request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 64))]
    pub display_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub current_password: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub new_password: Option<String>,
}

/// Leaderboard query parameters
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
