//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod badge_repo;
pub mod interview_repo;
pub mod question_repo;
pub mod submission_repo;
pub mod user_repo;

pub use badge_repo::BadgeRepository;
pub use interview_repo::InterviewRepository;
pub use question_repo::QuestionRepository;
pub use submission_repo::SubmissionRepository;
pub use user_repo::UserRepository;
