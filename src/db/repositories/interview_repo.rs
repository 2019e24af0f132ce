//! Interview repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Interview, InterviewApplication},
};

/// Repository for mock-interview database operations
pub struct InterviewRepository;

impl InterviewRepository {
    /// Create a new interview
    pub async fn create(
        pool: &PgPool,
        interviewer_id: &Uuid,
        title: &str,
        description: &str,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        capacity: i32,
    ) -> AppResult<Interview> {
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews
                (interviewer_id, title, description, scheduled_at, duration_minutes, capacity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(interviewer_id)
        .bind(title)
        .bind(description)
        .bind(scheduled_at)
        .bind(duration_minutes)
        .bind(capacity)
        .fetch_one(pool)
        .await?;

        Ok(interview)
    }

    /// Find interview by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Interview>> {
        let interview = sqlx::query_as::<_, Interview>(r#"SELECT * FROM interviews WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(interview)
    }

    /// List upcoming interviews
    pub async fn list_upcoming(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT * FROM interviews
            WHERE scheduled_at > NOW()
            ORDER BY scheduled_at
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(interviews)
    }

    /// Interviews scheduled by one interviewer
    pub async fn list_by_interviewer(
        pool: &PgPool,
        interviewer_id: &Uuid,
    ) -> AppResult<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT * FROM interviews
            WHERE interviewer_id = $1
            ORDER BY scheduled_at DESC
            "#,
        )
        .bind(interviewer_id)
        .fetch_all(pool)
        .await?;

        Ok(interviews)
    }

    /// Record a candidate's application
    pub async fn apply(
        pool: &PgPool,
        interview_id: &Uuid,
        candidate_id: &Uuid,
    ) -> AppResult<InterviewApplication> {
        let application = sqlx::query_as::<_, InterviewApplication>(
            r#"
            INSERT INTO interview_applications (interview_id, candidate_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(interview_id)
        .bind(candidate_id)
        .fetch_one(pool)
        .await?;

        Ok(application)
    }

    /// Find an application by ID
    pub async fn find_application(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<InterviewApplication>> {
        let application = sqlx::query_as::<_, InterviewApplication>(
            r#"SELECT * FROM interview_applications WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(application)
    }

    /// Update an application's status
    pub async fn update_application_status(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
    ) -> AppResult<InterviewApplication> {
        let application = sqlx::query_as::<_, InterviewApplication>(
            r#"
            UPDATE interview_applications
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(application)
    }

    /// Applications for one interview
    pub async fn list_applications(
        pool: &PgPool,
        interview_id: &Uuid,
    ) -> AppResult<Vec<InterviewApplication>> {
        let applications = sqlx::query_as::<_, InterviewApplication>(
            r#"
            SELECT * FROM interview_applications
            WHERE interview_id = $1
            ORDER BY applied_at
            "#,
        )
        .bind(interview_id)
        .fetch_all(pool)
        .await?;

        Ok(applications)
    }

    /// Count accepted applications for capacity checks
    pub async fn count_accepted(pool: &PgPool, interview_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM interview_applications
            WHERE interview_id = $1 AND status = 'accepted'
            "#,
        )
        .bind(interview_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
