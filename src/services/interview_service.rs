//! Mock-interview service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{InterviewRepository, UserRepository},
    error::{AppError, AppResult},
    models::{ApplicationStatus, Interview, InterviewApplication},
};

/// Interview service for business logic
pub struct InterviewService;

impl InterviewService {
    /// Schedule a new mock interview
    #[allow(clippy::too_many_arguments)]
    pub async fn create_interview(
        pool: &PgPool,
        interviewer_id: &Uuid,
        title: &str,
        description: &str,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        capacity: i32,
    ) -> AppResult<Interview> {
        let interviewer = UserRepository::find_by_id(pool, interviewer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !interviewer.can_schedule_interviews() {
            return Err(AppError::Forbidden(
                "Only interviewers can schedule interviews".to_string(),
            ));
        }

        if scheduled_at <= Utc::now() {
            return Err(AppError::Validation(
                "Interview must be scheduled in the future".to_string(),
            ));
        }

        if duration_minutes <= 0 || capacity <= 0 {
            return Err(AppError::Validation(
                "Duration and capacity must be positive".to_string(),
            ));
        }

        InterviewRepository::create(
            pool,
            interviewer_id,
            title,
            description,
            scheduled_at,
            duration_minutes,
            capacity,
        )
        .await
    }

    /// Get interview by ID
    pub async fn get_interview(pool: &PgPool, id: &Uuid) -> AppResult<Interview> {
        InterviewRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))
    }

    /// List upcoming interviews
    pub async fn list_upcoming(
        pool: &PgPool,
        page: u32,
        per_page: u32,
    ) -> AppResult<Vec<Interview>> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        InterviewRepository::list_upcoming(pool, offset, limit).await
    }

    /// Interviews scheduled by the requesting interviewer, with applications
    pub async fn list_mine(
        pool: &PgPool,
        interviewer_id: &Uuid,
    ) -> AppResult<Vec<(Interview, Vec<InterviewApplication>)>> {
        let interviews = InterviewRepository::list_by_interviewer(pool, interviewer_id).await?;

        let mut result = Vec::with_capacity(interviews.len());
        for interview in interviews {
            let applications =
                InterviewRepository::list_applications(pool, &interview.id).await?;
            result.push((interview, applications));
        }

        Ok(result)
    }

    /// Apply to an interview as a candidate
    pub async fn apply(
        pool: &PgPool,
        interview_id: &Uuid,
        candidate_id: &Uuid,
    ) -> AppResult<InterviewApplication> {
        let interview = Self::get_interview(pool, interview_id).await?;

        if interview.interviewer_id == *candidate_id {
            return Err(AppError::Validation(
                "Cannot apply to your own interview".to_string(),
            ));
        }

        if interview.scheduled_at <= Utc::now() {
            return Err(AppError::Validation(
                "Interview has already taken place".to_string(),
            ));
        }

        // The unique (interview, candidate) pair turns a double apply into
        // an AlreadyExists error at the storage layer
        InterviewRepository::apply(pool, interview_id, candidate_id).await
    }

    /// Accept or reject an application
    pub async fn decide_application(
        pool: &PgPool,
        interview_id: &Uuid,
        application_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        decision: ApplicationStatus,
    ) -> AppResult<InterviewApplication> {
        if matches!(decision, ApplicationStatus::Pending) {
            return Err(AppError::Validation(
                "Decision must be accepted or rejected".to_string(),
            ));
        }

        let interview = Self::get_interview(pool, interview_id).await?;

        if interview.interviewer_id != *requester_id && requester_role != roles::SUPER_ADMIN {
            return Err(AppError::Forbidden(
                "Only the scheduling interviewer can decide applications".to_string(),
            ));
        }

        let application = InterviewRepository::find_application(pool, application_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        if application.interview_id != *interview_id {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        if matches!(decision, ApplicationStatus::Accepted) {
            let accepted = InterviewRepository::count_accepted(pool, interview_id).await?;
            if accepted >= interview.capacity as i64 {
                return Err(AppError::Conflict("Interview is full".to_string()));
            }
        }

        InterviewRepository::update_application_status(pool, application_id, decision.as_str())
            .await
    }
}
