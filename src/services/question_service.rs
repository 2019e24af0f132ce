//! Question service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::QuestionRepository,
    error::{AppError, AppResult},
    execution::languages,
    handlers::questions::{
        request::{CreateQuestionRequest, UpdateQuestionRequest},
        response::{QuestionResponse, TestCaseResponse},
    },
    models::{Difficulty, Question, validate_boilerplate},
    utils::validation,
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// Create a new question
    pub async fn create_question(
        pool: &PgPool,
        author_id: &Uuid,
        payload: CreateQuestionRequest,
    ) -> AppResult<Question> {
        Self::validate_content(
            &payload.difficulty,
            &payload.boilerplates,
            payload.input_schema.as_deref(),
        )?;

        if payload.test_cases.is_empty() {
            return Err(AppError::Validation(
                "Question needs at least one test case".to_string(),
            ));
        }

        QuestionRepository::create(
            pool,
            &payload.title,
            &payload.description,
            &payload.difficulty,
            &payload.test_cases,
            &payload.boilerplates,
            payload.input_schema.as_deref(),
            author_id,
        )
        .await
    }

    /// Update an existing question
    pub async fn update_question(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateQuestionRequest,
    ) -> AppResult<Question> {
        // Ensure the question exists before patching
        QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if let Some(difficulty) = payload.difficulty.as_deref() {
            if Difficulty::from_str(difficulty).is_none() {
                return Err(AppError::Validation(format!(
                    "Invalid difficulty: {}",
                    difficulty
                )));
            }
        }

        if let Some(boilerplates) = payload.boilerplates.as_ref() {
            Self::validate_boilerplates(boilerplates)?;
        }

        if let Some(schema) = payload.input_schema.as_deref() {
            validation::validate_input_schema(schema).map_err(|e| {
                AppError::Validation(format!("Invalid input schema: {}", e))
            })?;
        }

        if let Some(test_cases) = payload.test_cases.as_deref() {
            if test_cases.is_empty() {
                return Err(AppError::Validation(
                    "Question needs at least one test case".to_string(),
                ));
            }
        }

        QuestionRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.difficulty.as_deref(),
            payload.test_cases.as_deref(),
            payload.boilerplates.as_ref(),
            payload.input_schema.as_deref(),
        )
        .await
    }

    /// Delete a question
    pub async fn delete_question(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        QuestionRepository::delete(pool, id).await
    }

    /// Get a question, with hidden test cases redacted for non-admins
    pub async fn get_question(
        pool: &PgPool,
        id: &Uuid,
        show_hidden: bool,
    ) -> AppResult<QuestionResponse> {
        let question = QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        Ok(Self::to_question_response(question, show_hidden))
    }

    /// List questions
    pub async fn list_questions(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        difficulty: Option<&str>,
        show_hidden: bool,
    ) -> AppResult<(Vec<QuestionResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (questions, total) = QuestionRepository::list(pool, offset, limit, difficulty).await?;

        let responses = questions
            .into_iter()
            .map(|q| Self::to_question_response(q, show_hidden))
            .collect();

        Ok((responses, total))
    }

    fn validate_content(
        difficulty: &str,
        boilerplates: &std::collections::HashMap<String, String>,
        input_schema: Option<&[crate::models::InputField]>,
    ) -> AppResult<()> {
        if Difficulty::from_str(difficulty).is_none() {
            return Err(AppError::Validation(format!(
                "Invalid difficulty: {}",
                difficulty
            )));
        }

        Self::validate_boilerplates(boilerplates)?;

        if let Some(schema) = input_schema {
            validation::validate_input_schema(schema)
                .map_err(|e| AppError::Validation(format!("Invalid input schema: {}", e)))?;
        }

        Ok(())
    }

    fn validate_boilerplates(
        boilerplates: &std::collections::HashMap<String, String>,
    ) -> AppResult<()> {
        for (language, template) in boilerplates {
            if languages::lookup(language).is_none() {
                return Err(AppError::Validation(format!(
                    "Boilerplate for unsupported language: {}",
                    language
                )));
            }
            if !validate_boilerplate(template) {
                return Err(AppError::Validation(format!(
                    "Boilerplate for {} must contain exactly one user-code marker",
                    language
                )));
            }
        }

        Ok(())
    }

    fn to_question_response(question: Question, show_hidden: bool) -> QuestionResponse {
        let test_cases = question
            .test_cases
            .0
            .iter()
            .filter(|tc| show_hidden || tc.is_visible)
            .map(|tc| TestCaseResponse {
                input: tc.input.clone(),
                expected_output: tc.expected_output.clone(),
                is_visible: tc.is_visible,
            })
            .collect();

        QuestionResponse {
            id: question.id,
            title: question.title,
            description: question.description,
            difficulty: question.difficulty,
            total_test_cases: question.test_cases.0.len(),
            test_cases,
            languages: question.boilerplates.0.keys().cloned().collect(),
            boilerplates: question.boilerplates.0,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}
