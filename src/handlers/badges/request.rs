//! Badge request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::BadgeCriterion;

/// Create badge request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBadgeRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(length(max = 512))]
    pub description: Option<String>,

    #[validate(length(max = 64))]
    pub icon: Option<String>,

    #[validate(length(max = 16))]
    pub color: Option<String>,

    pub criterion: BadgeCriterion,
}
