//! HTTP middleware

pub mod auth;
pub mod logging;
pub mod rate_limit;

pub use auth::{AuthenticatedUser, optional_auth_middleware};
pub use logging::logging_middleware;
pub use rate_limit::rate_limit_middleware;
