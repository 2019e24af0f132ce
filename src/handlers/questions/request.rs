//! Question request DTOs

use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::models::{InputField, TestCase};

/// Create question request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(min = 1, max = 65535))]
    pub description: String,

    /// easy, medium or hard
    pub difficulty: String,

    /// Ordered test cases
    pub test_cases: Vec<TestCase>,

    /// Language name -> boilerplate template
    pub boilerplates: HashMap<String, String>,

    /// Optional stdin shape descriptor
    pub input_schema: Option<Vec<InputField>>,
}

/// Update question request; absent fields keep their current value
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 65535))]
    pub description: Option<String>,

    pub difficulty: Option<String>,

    pub test_cases: Option<Vec<TestCase>>,

    pub boilerplates: Option<HashMap<String, String>>,

    pub input_schema: Option<Vec<InputField>>,
}

/// List questions query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub difficulty: Option<String>,
}
