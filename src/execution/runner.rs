//! Test-case runner
//!
//! Drives the execution client once per test case, strictly in order, and
//! aggregates per-case outcomes into a run result. Stops at the first
//! non-passing case so a submission already known to fail does not burn
//! execution quota on the remaining cases.

use std::time::Duration;

use crate::error::AppError;
use crate::execution::client::{self, ExecutionBackend};
use crate::execution::input;
use crate::models::{CaseResult, InputField, SubmissionStatus, TestCase};

/// Polling parameters for one execution
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub max_attempts: u32,
    pub delay: Duration,
}

/// Aggregate result of running a submission against its test cases
#[derive(Debug)]
pub struct RunOutcome {
    pub status: SubmissionStatus,
    /// Results for executed cases only; cases after the first failure never run
    pub case_results: Vec<CaseResult>,
    pub passed_count: i32,
    pub failed_count: i32,
    /// Sum of per-case execution times
    pub total_time_ms: f64,
    /// Maximum per-case memory usage
    pub max_memory_kb: i64,
}

/// Run the combined source against the ordered test cases
///
/// Total: every per-case failure mode, including execution-service errors
/// and poll exhaustion, is absorbed into that case's recorded result.
pub async fn run_test_cases<B>(
    backend: &B,
    language_id: i32,
    source_code: &str,
    cases: &[TestCase],
    input_schema: Option<&[InputField]>,
    poll: &PollSettings,
) -> RunOutcome
where
    B: ExecutionBackend + ?Sized,
{
    let mut case_results: Vec<CaseResult> = Vec::new();
    let mut passed_count = 0i32;
    let mut failed_count = 0i32;
    let mut total_time_ms = 0.0f64;
    let mut max_memory_kb = 0i64;
    let mut first_failure: Option<SubmissionStatus> = None;

    for case in cases {
        let stdin = input::normalize_for_question(&case.input, input_schema);

        let attempt = submit_and_wait(backend, language_id, source_code, &stdin, poll).await;

        let (status, execution, error_message) = match attempt {
            Ok(execution) => {
                let status = if execution.status.is_success() {
                    if execution.stdout.trim() == case.expected_output.trim() {
                        SubmissionStatus::Accepted
                    } else {
                        SubmissionStatus::WrongAnswer
                    }
                } else {
                    execution.status.as_submission_status()
                };
                (status, Some(execution), None)
            }
            Err(AppError::ExecutionTimeout) => (SubmissionStatus::Timeout, None, None),
            Err(e) => (SubmissionStatus::RuntimeError, None, Some(e.to_string())),
        };

        let (stdout, stderr, time_ms, memory_kb) = match execution {
            Some(execution) => (
                execution.stdout,
                execution.stderr,
                execution.time_ms,
                execution.memory_kb,
            ),
            None => (String::new(), error_message, 0.0, 0),
        };

        total_time_ms += time_ms;
        max_memory_kb = max_memory_kb.max(memory_kb);

        case_results.push(CaseResult {
            input: case.input.clone(),
            expected_output: case.expected_output.clone(),
            actual_output: stdout,
            status: status.as_str().to_string(),
            time_ms,
            memory_kb,
            stderr,
        });

        if status.is_accepted() {
            passed_count += 1;
        } else {
            failed_count += 1;
            first_failure = Some(status);
            break;
        }
    }

    let status = match first_failure {
        Some(status) => status,
        None if passed_count > 0 => SubmissionStatus::Accepted,
        None => SubmissionStatus::InternalError,
    };

    RunOutcome {
        status,
        case_results,
        passed_count,
        failed_count,
        total_time_ms,
        max_memory_kb,
    }
}

async fn submit_and_wait<B>(
    backend: &B,
    language_id: i32,
    source_code: &str,
    stdin: &str,
    poll: &PollSettings,
) -> crate::error::AppResult<crate::execution::client::ExecutionResult>
where
    B: ExecutionBackend + ?Sized,
{
    let token = backend.submit(source_code, language_id, stdin).await?;
    client::wait_for_completion(backend, &token, poll.max_attempts, poll.delay).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::client::{ExecutionResult, ExecutionStatus, MockExecutionBackend};

    fn poll() -> PollSettings {
        PollSettings {
            max_attempts: 3,
            delay: Duration::ZERO,
        }
    }

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_visible: true,
        }
    }

    fn success(stdout: &str, time_ms: f64, memory_kb: i64) -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus::Accepted,
            stdout: stdout.to_string(),
            stderr: None,
            time_ms,
            memory_kb,
        }
    }

    fn processing() -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus::Processing,
            stdout: String::new(),
            stderr: None,
            time_ms: 0.0,
            memory_kb: 0,
        }
    }

    #[tokio::test]
    async fn test_full_pass() {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_submit()
            .times(1)
            .returning(|_, _, _| Ok("tok".to_string()));
        backend
            .expect_fetch_result()
            .times(1)
            .returning(|_| Ok(success("olleh", 12.0, 900)));

        let outcome = run_test_cases(
            &backend,
            71,
            "print(input()[::-1])",
            &[case("hello", "olleh")],
            None,
            &poll(),
        )
        .await;

        assert_eq!(outcome.status, SubmissionStatus::Accepted);
        assert_eq!(outcome.passed_count, 1);
        assert_eq!(outcome.failed_count, 0);
        assert_eq!(outcome.case_results.len(), 1);
        assert_eq!(outcome.case_results[0].status, "Accepted");
    }

    #[tokio::test]
    async fn test_early_stop_on_wrong_answer() {
        let mut backend = MockExecutionBackend::new();
        let mut seq = mockall::Sequence::new();

        // Only two of three cases ever reach the execution service
        backend
            .expect_submit()
            .times(2)
            .returning(|_, _, _| Ok("tok".to_string()));
        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(success("ok1", 5.0, 100)));
        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(success("unexpected", 5.0, 100)));

        let cases = [case("a", "ok1"), case("b", "ok2"), case("c", "ok3")];
        let outcome = run_test_cases(&backend, 63, "code", &cases, None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::WrongAnswer);
        assert_eq!(outcome.case_results.len(), 2);
        assert_eq!(outcome.case_results[0].status, "Accepted");
        assert_eq!(outcome.case_results[1].status, "Wrong Answer");
        assert_eq!(outcome.passed_count, 1);
        assert_eq!(outcome.failed_count, 1);
    }

    #[tokio::test]
    async fn test_poll_exhaustion_becomes_timeout_case() {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_submit()
            .times(1)
            .returning(|_, _, _| Ok("tok".to_string()));
        backend
            .expect_fetch_result()
            .times(3)
            .returning(|_| Ok(processing()));

        let cases = [case("a", "1"), case("b", "2")];
        let outcome = run_test_cases(&backend, 63, "code", &cases, None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::Timeout);
        assert_eq!(outcome.case_results.len(), 1);
        assert_eq!(outcome.case_results[0].status, "Timeout");
        assert_eq!(outcome.failed_count, 1);
    }

    #[tokio::test]
    async fn test_service_error_becomes_runtime_error_case() {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_submit()
            .times(1)
            .returning(|_, _, _| Err(AppError::ExecutionService("connection refused".to_string())));

        let outcome =
            run_test_cases(&backend, 63, "code", &[case("a", "1")], None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::RuntimeError);
        assert_eq!(outcome.case_results.len(), 1);
        assert!(
            outcome.case_results[0]
                .stderr
                .as_deref()
                .unwrap()
                .contains("connection refused")
        );
    }

    #[tokio::test]
    async fn test_aggregates_sum_time_and_max_memory() {
        let mut backend = MockExecutionBackend::new();
        let mut seq = mockall::Sequence::new();

        backend
            .expect_submit()
            .times(2)
            .returning(|_, _, _| Ok("tok".to_string()));
        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(success("1", 12.5, 100)));
        backend
            .expect_fetch_result()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(success("2", 20.0, 300)));

        let cases = [case("a", "1"), case("b", "2")];
        let outcome = run_test_cases(&backend, 63, "code", &cases, None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::Accepted);
        assert!((outcome.total_time_ms - 32.5).abs() < f64::EPSILON);
        assert_eq!(outcome.max_memory_kb, 300);
    }

    #[tokio::test]
    async fn test_no_cases_is_not_accepted() {
        let backend = MockExecutionBackend::new();

        let outcome = run_test_cases(&backend, 63, "code", &[], None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::InternalError);
        assert_eq!(outcome.passed_count, 0);
        assert!(outcome.case_results.is_empty());
        assert_eq!(outcome.total_time_ms, 0.0);
        assert_eq!(outcome.max_memory_kb, 0);
    }

    #[tokio::test]
    async fn test_engine_reported_failure_recorded_verbatim() {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_submit()
            .times(1)
            .returning(|_, _, _| Ok("tok".to_string()));
        backend.expect_fetch_result().times(1).returning(|_| {
            Ok(ExecutionResult {
                status: ExecutionStatus::CompilationError,
                stdout: String::new(),
                stderr: Some("expected `;`".to_string()),
                time_ms: 0.0,
                memory_kb: 0,
            })
        });

        let outcome =
            run_test_cases(&backend, 54, "int main(", &[case("a", "1")], None, &poll()).await;

        assert_eq!(outcome.status, SubmissionStatus::CompilationError);
        assert_eq!(outcome.case_results[0].status, "Compilation Error");
        assert_eq!(
            outcome.case_results[0].stderr.as_deref(),
            Some("expected `;`")
        );
    }
}
