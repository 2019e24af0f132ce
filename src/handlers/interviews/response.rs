//! Mock-interview response DTOs

use serde::Serialize;

use crate::models::{Interview, InterviewApplication};

/// An interviewer's interview with its applications
#[derive(Debug, Serialize)]
pub struct InterviewWithApplications {
    #[serde(flatten)]
    pub interview: Interview,
    pub applications: Vec<InterviewApplication>,
}
