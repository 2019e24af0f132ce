//! Submission repository

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CaseResult, Submission},
};

/// One row of a user's accepted-submission history, deduplicated by question
#[derive(Debug, sqlx::FromRow)]
pub struct SolvedQuestion {
    pub question_id: Uuid,
    pub difficulty: String,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission record
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        question_id: &Uuid,
        language: &str,
        source_code: &str,
        status: &str,
        passed_count: i32,
        failed_count: i32,
        points_awarded: i32,
        total_time_ms: f64,
        max_memory_kb: i64,
        case_results: &[CaseResult],
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions
                (user_id, question_id, language, source_code, status,
                 passed_count, failed_count, points_awarded,
                 total_time_ms, max_memory_kb, case_results)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .bind(language)
        .bind(source_code)
        .bind(status)
        .bind(passed_count)
        .bind(failed_count)
        .bind(points_awarded)
        .bind(total_time_ms)
        .bind(max_memory_kb)
        .bind(Json(case_results))
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// List submissions with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        user_id: Option<&Uuid>,
        question_id: Option<&Uuid>,
        status: Option<&str>,
    ) -> AppResult<(Vec<Submission>, i64)> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE
                ($1::uuid IS NULL OR user_id = $1)
                AND ($2::uuid IS NULL OR question_id = $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY submitted_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE
                ($1::uuid IS NULL OR user_id = $1)
                AND ($2::uuid IS NULL OR question_id = $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((submissions, count))
    }

    /// Count a user's accepted submissions for one question
    pub async fn count_accepted_for_question(
        pool: &PgPool,
        user_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE user_id = $1 AND question_id = $2 AND status = 'Accepted'
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Distinct questions a user has accepted submissions for, with difficulty
    ///
    /// Source of truth for stat reconciliation.
    pub async fn solved_questions(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<SolvedQuestion>> {
        let rows = sqlx::query_as::<_, SolvedQuestion>(
            r#"
            SELECT DISTINCT s.question_id, q.difficulty
            FROM submissions s
            JOIN questions q ON q.id = s.question_id
            WHERE s.user_id = $1 AND s.status = 'Accepted'
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Count total submissions
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM submissions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count submissions by status
    pub async fn count_by_status(pool: &PgPool, status: &str) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM submissions WHERE status = $1"#)
                .bind(status)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
