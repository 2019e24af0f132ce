//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod badges;
pub mod health;
pub mod interviews;
pub mod questions;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/questions", questions::routes())
        .nest("/submissions", submissions::routes())
        .nest("/badges", badges::routes())
        .nest("/interviews", interviews::routes())
        .nest("/admin", admin::routes())
}
