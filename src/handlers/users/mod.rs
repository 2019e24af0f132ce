//! User handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(handler::leaderboard))
        .route("/me", patch(handler::update_me))
        .route("/{id}", get(handler::get_user))
}
