//! Question handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_questions).post(handler::create_question),
        )
        .route(
            "/{id}",
            get(handler::get_question)
                .put(handler::update_question)
                .delete(handler::delete_question),
        )
}
