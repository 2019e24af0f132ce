//! DSAPrep - Coding practice and mock-interview platform backend
//!
//! This library provides the core functionality for the DSAPrep platform,
//! where users solve data-structure-and-algorithm questions, earn points,
//! streaks and badges, and apply to mock interviews.
//!
//! # Features
//!
//! - Submission evaluation against per-question test cases via a remote
//!   code-execution service (submit + poll)
//! - Points, daily streaks and badge awards on accepted submissions
//! - Question authoring with per-language boilerplate templates
//! - Mock-interview scheduling and applications
//! - Role-based access control (candidate, interviewer, super admin)
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Execution**: Remote execution client and test-case runner

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod execution;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
