//! Remote code execution
//!
//! Everything involved in evaluating a submission: the HTTP client for the
//! external execution service, stdin reconstruction for flattened test-case
//! inputs, the supported-language registry, and the test-case runner that
//! drives one execution per test case and aggregates the results.

pub mod client;
pub mod input;
pub mod languages;
pub mod runner;

pub use client::{ExecutionBackend, ExecutionClient, ExecutionResult, ExecutionStatus};
pub use languages::LanguageSpec;
pub use runner::{PollSettings, RunOutcome};
