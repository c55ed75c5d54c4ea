use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::modules::manuscripts::use_cases::view_manuscript_progress::inbound::http as progress_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route(
            "/manuscripts/{manuscript_id}/progress",
            get(progress_http::handle),
        )
        .route("/project-timeline", post(progress_http::project_document))
        .with_state(state)
}
