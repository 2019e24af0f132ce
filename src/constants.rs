//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// REMOTE EXECUTION DEFAULTS
// =============================================================================

/// Default maximum number of poll attempts for an execution result
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 10;

/// Default delay between poll attempts in milliseconds
pub const DEFAULT_POLL_DELAY_MS: u64 = 1000;

/// Default HTTP request timeout for the execution service in seconds
pub const DEFAULT_EXECUTION_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Marker in a question's boilerplate that user code replaces
pub const USER_CODE_MARKER: &str = "{{USER_CODE}}";

// =============================================================================
// DIFFICULTIES & POINTS
// =============================================================================

/// Question difficulty identifiers
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All supported difficulty identifiers
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

/// Points awarded for an accepted submission, per difficulty
pub const POINTS_EASY: i32 = 5;

pub const POINTS_MEDIUM: i32 = 10;

pub const POINTS_HARD: i32 = 20;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const CANDIDATE: &str = "candidate";
    pub const INTERVIEWER: &str = "interviewer";
    pub const SUPER_ADMIN: &str = "super_admin";

    /// All user roles
    pub const ALL: &[&str] = &[CANDIDATE, INTERVIEWER, SUPER_ADMIN];
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Aggregate and per-test-case submission statuses
pub mod statuses {
    pub const ACCEPTED: &str = "Accepted";
    pub const WRONG_ANSWER: &str = "Wrong Answer";
    pub const TIME_LIMIT_EXCEEDED: &str = "Time Limit Exceeded";
    pub const COMPILATION_ERROR: &str = "Compilation Error";
    pub const RUNTIME_ERROR: &str = "Runtime Error";
    /// Polling exhausted before the execution service reported a terminal state
    pub const TIMEOUT: &str = "Timeout";
    pub const INTERNAL_ERROR: &str = "Internal Error";
}

// =============================================================================
// INTERVIEW APPLICATION STATUSES
// =============================================================================

/// Mock-interview application statuses
pub mod application_statuses {
    pub const PENDING: &str = "pending";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";

    pub const ALL: &[&str] = &[PENDING, ACCEPTED, REJECTED];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Submission endpoint - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    /// Submission endpoint - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum question title length
pub const MAX_QUESTION_TITLE_LENGTH: u64 = 256;

/// Maximum question description length
pub const MAX_QUESTION_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum source code size in bytes (256 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 256 * 1024;

/// Maximum test case input size in bytes (1 MB)
pub const MAX_TEST_CASE_INPUT_SIZE: usize = 1024 * 1024;
