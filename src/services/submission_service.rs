//! Submission service
//!
//! Orchestrates the evaluation workflow: validate the request, merge user
//! code into the question's boilerplate, run the test cases against the
//! remote execution service, record the submission, then hand off to the
//! scoring engine. Scoring failures never roll back the recorded
//! submission.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{QuestionRepository, SubmissionRepository},
    error::{AppError, AppResult},
    execution::{ExecutionClient, languages, runner},
    handlers::submissions::{
        request::CreateSubmissionRequest,
        response::{CaseResultResponse, EvaluationResponse, SubmissionResponse},
    },
    models::{Difficulty, Question, Submission},
    services::ScoringService,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Evaluate a submission end to end
    pub async fn evaluate(
        pool: &PgPool,
        executor: &ExecutionClient,
        user_id: &Uuid,
        payload: CreateSubmissionRequest,
        show_hidden: bool,
    ) -> AppResult<EvaluationResponse> {
        let question = QuestionRepository::find_by_id(pool, &payload.question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        let language = languages::lookup(&payload.language).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported language: {}. Supported languages: {:?}",
                payload.language,
                languages::supported_names()
            ))
        })?;

        let template = question.boilerplate_for(language.name).ok_or_else(|| {
            AppError::Validation(format!(
                "Question has no {} boilerplate",
                language.name
            ))
        })?;

        if question.test_cases.is_empty() {
            return Err(AppError::Validation(
                "Question has no test cases".to_string(),
            ));
        }

        let source_code = (language.combine)(template, &payload.code);
        let input_schema = question.input_schema.as_ref().map(|s| s.0.as_slice());

        let outcome = runner::run_test_cases(
            executor,
            language.language_id,
            &source_code,
            &question.test_cases,
            input_schema,
            &executor.poll_settings(),
        )
        .await;

        let points_awarded = if outcome.status.is_accepted() && outcome.passed_count > 0 {
            Difficulty::from_str(&question.difficulty)
                .map(|d| d.points())
                .unwrap_or(0)
        } else {
            0
        };

        // The durable record comes first; a storage failure here fails the request
        let submission = SubmissionRepository::create(
            pool,
            user_id,
            &question.id,
            language.name,
            &payload.code,
            outcome.status.as_str(),
            outcome.passed_count,
            outcome.failed_count,
            points_awarded,
            outcome.total_time_ms,
            outcome.max_memory_kb,
            &outcome.case_results,
        )
        .await?;

        if outcome.status.is_accepted() && outcome.passed_count > 0 {
            // Best effort: the submission is already durable, so scoring
            // failures are logged and left to reconciliation
            if let Err(e) = ScoringService::apply_accepted(pool, user_id, &question).await {
                tracing::error!(
                    submission_id = %submission.id,
                    user_id = %user_id,
                    error = %e,
                    "Scoring update failed after recorded submission"
                );
            }
        }

        Ok(Self::to_evaluation_response(&question, submission, show_hidden))
    }

    /// Get submission by ID
    pub async fn get_submission(pool: &PgPool, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// List submissions
    pub async fn list_submissions(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        user_id: Option<&Uuid>,
        question_id: Option<&Uuid>,
        status: Option<&str>,
    ) -> AppResult<(Vec<SubmissionResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (submissions, total) =
            SubmissionRepository::list(pool, offset, limit, user_id, question_id, status).await?;

        let responses: Vec<SubmissionResponse> = futures::future::try_join_all(
            submissions
                .into_iter()
                .map(|s| Self::to_submission_response(pool, s)),
        )
        .await?;

        Ok((responses, total))
    }

    /// Build the evaluation response, redacting hidden test-case data
    fn to_evaluation_response(
        question: &Question,
        submission: Submission,
        show_hidden: bool,
    ) -> EvaluationResponse {
        let case_results = submission
            .case_results
            .0
            .iter()
            .enumerate()
            .map(|(index, case)| {
                let visible = show_hidden
                    || question
                        .test_cases
                        .get(index)
                        .map(|tc| tc.is_visible)
                        .unwrap_or(false);

                CaseResultResponse {
                    index,
                    status: case.status.clone(),
                    input: visible.then(|| case.input.clone()),
                    expected_output: visible.then(|| case.expected_output.clone()),
                    actual_output: visible.then(|| case.actual_output.clone()),
                    time_ms: case.time_ms,
                    memory_kb: case.memory_kb,
                    stderr: case.stderr.clone(),
                }
            })
            .collect();

        EvaluationResponse {
            submission_id: submission.id,
            question_id: submission.question_id,
            status: submission.status,
            points_earned: submission.points_awarded,
            passed_count: submission.passed_count,
            failed_count: submission.failed_count,
            total_time_ms: submission.total_time_ms,
            max_memory_kb: submission.max_memory_kb,
            case_results,
        }
    }

    // Helper function
    async fn to_submission_response(
        pool: &PgPool,
        submission: Submission,
    ) -> AppResult<SubmissionResponse> {
        let question_title: Option<String> =
            sqlx::query_scalar(r#"SELECT title FROM questions WHERE id = $1"#)
                .bind(submission.question_id)
                .fetch_optional(pool)
                .await?;

        Ok(SubmissionResponse {
            id: submission.id,
            user_id: submission.user_id,
            question_id: submission.question_id,
            question_title: question_title.unwrap_or_default(),
            language: submission.language,
            status: submission.status,
            passed_count: submission.passed_count,
            failed_count: submission.failed_count,
            points_awarded: submission.points_awarded,
            total_time_ms: submission.total_time_ms,
            max_memory_kb: submission.max_memory_kb,
            submitted_at: submission.submitted_at,
        })
    }
}
