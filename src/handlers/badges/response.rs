//! Badge response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A badge awarded to a user
#[derive(Debug, Serialize)]
pub struct AwardedBadgeResponse {
    pub badge_id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub awarded_at: DateTime<Utc>,
}
