//! Mock-interview handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Interview routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_interviews).post(handler::create_interview),
        )
        .route("/mine", get(handler::my_interviews))
        .route("/{id}", get(handler::get_interview))
        .route("/{id}/apply", post(handler::apply))
        .route(
            "/{id}/applications/{application_id}",
            patch(handler::decide_application),
        )
}
