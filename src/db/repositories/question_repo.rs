//! Question repository

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{InputField, Question, TestCase},
};

/// Repository for question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        difficulty: &str,
        test_cases: &[TestCase],
        boilerplates: &std::collections::HashMap<String, String>,
        input_schema: Option<&[InputField]>,
        author_id: &Uuid,
    ) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions
                (title, description, difficulty, test_cases, boilerplates, input_schema, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(Json(test_cases))
        .bind(Json(boilerplates))
        .bind(input_schema.map(Json))
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(question)
    }

    /// Find question by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(r#"SELECT * FROM questions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(question)
    }

    /// Update a question; None fields keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&str>,
        test_cases: Option<&[TestCase]>,
        boilerplates: Option<&std::collections::HashMap<String, String>>,
        input_schema: Option<&[InputField]>,
    ) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                test_cases = COALESCE($5, test_cases),
                boilerplates = COALESCE($6, boilerplates),
                input_schema = COALESCE($7, input_schema),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(test_cases.map(Json))
        .bind(boilerplates.map(Json))
        .bind(input_schema.map(Json))
        .fetch_one(pool)
        .await?;

        Ok(question)
    }

    /// Delete a question
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List questions with pagination and an optional difficulty filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        difficulty: Option<&str>,
    ) -> AppResult<(Vec<Question>, i64)> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT * FROM questions
            WHERE ($1::text IS NULL OR difficulty = $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(difficulty)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM questions WHERE ($1::text IS NULL OR difficulty = $1)"#,
        )
        .bind(difficulty)
        .fetch_one(pool)
        .await?;

        Ok((questions, count))
    }

    /// Count total questions
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
