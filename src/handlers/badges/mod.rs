//! Badge handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

/// Badge routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_badges).post(handler::create_badge))
        .route("/me", get(handler::my_badges))
        .route("/{id}", delete(handler::delete_badge))
}
