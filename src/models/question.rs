//! Question model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::constants::{POINTS_EASY, POINTS_HARD, POINTS_MEDIUM, USER_CODE_MARKER};

/// Question database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    /// Ordered test cases, stored as a JSONB document
    pub test_cases: Json<Vec<TestCase>>,
    /// Language name -> boilerplate template containing the user-code marker
    pub boilerplates: Json<HashMap<String, String>>,
    /// Optional stdin shape descriptor for flattened-input reconstruction
    pub input_schema: Option<Json<Vec<InputField>>>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Look up the boilerplate template for a language
    ///
    /// Keys are matched case-insensitively so authoring casing does not have
    /// to agree with the language registry.
    pub fn boilerplate_for(&self, language: &str) -> Option<&str> {
        self.boilerplates
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(language))
            .map(|(_, template)| template.as_str())
    }
}

/// A single test case on a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    /// Hidden test cases are redacted in candidate-facing responses
    pub is_visible: bool,
}

/// One field of a question's stdin shape descriptor
///
/// Describes how a flattened, space-separated input line maps back onto
/// the multi-line stdin the question's boilerplate parser expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputField {
    /// One token, emitted on its own line
    Scalar,
    /// A run of tokens emitted space-joined on one line; the length is the
    /// parsed value of an earlier Scalar field
    Array { len_field: usize },
}

/// Question difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get difficulty as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse difficulty from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Points awarded for an accepted submission of this difficulty
    ///
    /// Single source for the difficulty -> points table; the incremental
    /// scoring path and the reconciliation recompute both go through here.
    pub fn points(&self) -> i32 {
        match self {
            Self::Easy => POINTS_EASY,
            Self::Medium => POINTS_MEDIUM,
            Self::Hard => POINTS_HARD,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check that a boilerplate template contains exactly one user-code marker
pub fn validate_boilerplate(template: &str) -> bool {
    template.matches(USER_CODE_MARKER).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for name in ["easy", "medium", "hard"] {
            let d = Difficulty::from_str(name).unwrap();
            assert_eq!(d.as_str(), name);
        }
        assert!(Difficulty::from_str("expert").is_none());
    }

    #[test]
    fn test_points_table() {
        assert_eq!(Difficulty::Easy.points(), 5);
        assert_eq!(Difficulty::Medium.points(), 10);
        assert_eq!(Difficulty::Hard.points(), 20);
    }

    #[test]
    fn test_validate_boilerplate() {
        assert!(validate_boilerplate("fn main() { {{USER_CODE}} }"));
        assert!(!validate_boilerplate("no marker here"));
        assert!(!validate_boilerplate("{{USER_CODE}} {{USER_CODE}}"));
    }
}
