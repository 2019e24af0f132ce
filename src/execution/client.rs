//! Remote execution service client
//!
//! Wraps the external code-execution API: submit source + stdin for
//! asynchronous execution, then poll for the result until the engine reports
//! a terminal status. Polling is fixed-interval with a bounded attempt
//! count; this is the sole retry policy in the system.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ExecutorConfig;
use crate::error::{AppError, AppResult};
use crate::models::SubmissionStatus;

/// Header used to pass the optional API key to the execution service
const API_KEY_HEADER: &str = "X-Auth-Token";

/// Status codes reported by the execution engine
///
/// Closed enumeration mirroring the engine's numeric status ids:
/// 1 queued, 2 processing, 3 successful run, 4 wrong answer, 5 time limit,
/// 6 compile error, 7-12 runtime error variants, 13+ internal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    InternalError,
}

impl ExecutionStatus {
    /// Map an engine status id onto the enumeration
    pub fn from_id(id: i32) -> Self {
        match id {
            1 => Self::InQueue,
            2 => Self::Processing,
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            5 => Self::TimeLimitExceeded,
            6 => Self::CompilationError,
            7..=12 => Self::RuntimeError,
            _ => Self::InternalError,
        }
    }

    /// Check if the execution has finished (successfully or not)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InQueue | Self::Processing)
    }

    /// Check if this is the successful-execution terminal state
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Submission status recorded for a test case that ended in this state
    pub fn as_submission_status(&self) -> SubmissionStatus {
        match self {
            Self::Accepted => SubmissionStatus::Accepted,
            Self::WrongAnswer => SubmissionStatus::WrongAnswer,
            Self::TimeLimitExceeded => SubmissionStatus::TimeLimitExceeded,
            Self::CompilationError => SubmissionStatus::CompilationError,
            Self::RuntimeError => SubmissionStatus::RuntimeError,
            Self::InQueue | Self::Processing | Self::InternalError => {
                SubmissionStatus::InternalError
            }
        }
    }
}

/// Result of one remote execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub stdout: String,
    pub stderr: Option<String>,
    pub time_ms: f64,
    pub memory_kb: i64,
}

/// Interface to the execution service, mockable for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Send code for asynchronous execution; returns an opaque token
    async fn submit(&self, source_code: &str, language_id: i32, stdin: &str) -> AppResult<String>;

    /// Fetch the current state of an execution
    async fn fetch_result(&self, token: &str) -> AppResult<ExecutionResult>;
}

/// Poll `fetch_result` until the status is terminal or attempts run out
///
/// Sleeps `delay` between attempts, not before the first. Exhausting the
/// attempt budget while the engine still reports queued/processing fails
/// with `ExecutionTimeout`.
pub async fn wait_for_completion<B>(
    backend: &B,
    token: &str,
    max_attempts: u32,
    delay: Duration,
) -> AppResult<ExecutionResult>
where
    B: ExecutionBackend + ?Sized,
{
    for attempt in 0..max_attempts {
        if attempt > 0 {
            tokio::time::sleep(delay).await;
        }

        let result = backend.fetch_result(token).await?;
        if result.status.is_terminal() {
            return Ok(result);
        }
    }

    Err(AppError::ExecutionTimeout)
}

/// HTTP client for the remote execution service
#[derive(Clone)]
pub struct ExecutionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    poll_max_attempts: u32,
    poll_delay: Duration,
}

impl ExecutionClient {
    /// Create a new client from configuration
    pub fn new(config: &ExecutorConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            poll_max_attempts: config.poll_max_attempts,
            poll_delay: Duration::from_millis(config.poll_delay_ms),
        })
    }

    /// Configured poll settings for the test-case runner
    pub fn poll_settings(&self) -> crate::execution::runner::PollSettings {
        crate::execution::runner::PollSettings {
            max_attempts: self.poll_max_attempts,
            delay: self.poll_delay,
        }
    }

    /// Poll an execution to completion with the configured settings
    pub async fn wait(&self, token: &str) -> AppResult<ExecutionResult> {
        wait_for_completion(self, token, self.poll_max_attempts, self.poll_delay).await
    }

    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }
}

#[async_trait]
impl ExecutionBackend for ExecutionClient {
    async fn submit(&self, source_code: &str, language_id: i32, stdin: &str) -> AppResult<String> {
        let url = format!("{}/submissions", self.base_url);

        let response = self
            .with_auth(self.http.post(&url))
            .json(&SubmitRequest {
                source_code,
                language_id,
                stdin,
                wait: false,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExecutionService(format!(
                "submission rejected with status {}",
                response.status()
            )));
        }

        let body: SubmitResponse = response.json().await?;
        Ok(body.token)
    }

    async fn fetch_result(&self, token: &str) -> AppResult<ExecutionResult> {
        let url = format!("{}/submissions/{}", self.base_url, token);

        let response = self.with_auth(self.http.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExecutionService(format!(
                "result fetch failed with status {}",
                response.status()
            )));
        }

        let body: ResultResponse = response.json().await?;

        Ok(ExecutionResult {
            status: ExecutionStatus::from_id(body.status.id),
            stdout: body.stdout.unwrap_or_default(),
            stderr: body.stderr,
            // The engine reports wall time as seconds in a string field
            time_ms: body
                .time
                .and_then(|t| t.parse::<f64>().ok())
                .map(|secs| secs * 1000.0)
                .unwrap_or(0.0),
            memory_kb: body.memory.unwrap_or(0),
        })
    }
}

// Wire format of the execution service

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    source_code: &'a str,
    language_id: i32,
    stdin: &'a str,
    wait: bool,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    id: i32,
    #[allow(dead_code)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultResponse {
    status: StatusBody,
    stdout: Option<String>,
    stderr: Option<String>,
    time: Option<String>,
    memory: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: ExecutionStatus) -> ExecutionResult {
        ExecutionResult {
            status,
            stdout: String::new(),
            stderr: None,
            time_ms: 0.0,
            memory_kb: 0,
        }
    }

    #[test]
    fn test_status_from_id() {
        assert_eq!(ExecutionStatus::from_id(1), ExecutionStatus::InQueue);
        assert_eq!(ExecutionStatus::from_id(2), ExecutionStatus::Processing);
        assert_eq!(ExecutionStatus::from_id(3), ExecutionStatus::Accepted);
        assert_eq!(ExecutionStatus::from_id(4), ExecutionStatus::WrongAnswer);
        assert_eq!(
            ExecutionStatus::from_id(5),
            ExecutionStatus::TimeLimitExceeded
        );
        assert_eq!(
            ExecutionStatus::from_id(6),
            ExecutionStatus::CompilationError
        );
        for id in 7..=12 {
            assert_eq!(ExecutionStatus::from_id(id), ExecutionStatus::RuntimeError);
        }
        assert_eq!(ExecutionStatus::from_id(13), ExecutionStatus::InternalError);
        assert_eq!(ExecutionStatus::from_id(99), ExecutionStatus::InternalError);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ExecutionStatus::InQueue.is_terminal());
        assert!(!ExecutionStatus::Processing.is_terminal());
        assert!(ExecutionStatus::Accepted.is_terminal());
        assert!(ExecutionStatus::WrongAnswer.is_terminal());
        assert!(ExecutionStatus::InternalError.is_terminal());
    }

    #[test]
    fn test_submission_status_mapping() {
        assert_eq!(
            ExecutionStatus::TimeLimitExceeded.as_submission_status(),
            SubmissionStatus::TimeLimitExceeded
        );
        assert_eq!(
            ExecutionStatus::CompilationError.as_submission_status(),
            SubmissionStatus::CompilationError
        );
        assert_eq!(
            ExecutionStatus::Processing.as_submission_status(),
            SubmissionStatus::InternalError
        );
    }

    #[tokio::test]
    async fn test_wait_returns_first_terminal_result() {
        let mut backend = MockExecutionBackend::new();
        let mut seq = mockall::Sequence::new();

        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(result(ExecutionStatus::Processing)));
        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(result(ExecutionStatus::Accepted)));

        let got = wait_for_completion(&backend, "tok", 5, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(got.status, ExecutionStatus::Accepted);
    }

    #[tokio::test]
    async fn test_wait_times_out_after_max_attempts() {
        let mut backend = MockExecutionBackend::new();

        backend
            .expect_fetch_result()
            .times(3)
            .returning(|_| Ok(result(ExecutionStatus::Processing)));

        let err = wait_for_completion(&backend, "tok", 3, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExecutionTimeout));
    }

    #[tokio::test]
    async fn test_wait_propagates_service_errors() {
        let mut backend = MockExecutionBackend::new();

        backend
            .expect_fetch_result()
            .times(1)
            .returning(|_| Err(AppError::ExecutionService("unreachable".to_string())));

        let err = wait_for_completion(&backend, "tok", 5, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExecutionService(_)));
    }
}
