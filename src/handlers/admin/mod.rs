//! Admin handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Admin routes (super admin only; enforced per handler)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handler::platform_stats))
        .route("/users", get(handler::list_users))
        .route("/users/{id}", delete(handler::delete_user))
        .route("/users/{id}/role", patch(handler::update_role))
        .route("/users/{id}/recompute", post(handler::recompute_user))
        .route("/recompute", post(handler::recompute_all))
}
