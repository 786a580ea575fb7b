use axum::{Router, routing::{get, post}};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::spam::use_cases::submit_spam::inbound::http as submit_http;
use crate::modules::spam::use_cases::transform_to_ham::inbound::http as transform_http;
use crate::shell::state::AppState;

/// Body of every 4xx the service answers with.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/spam", post(submit_http::handle))
        .route("/ham/{ham_id}", get(transform_http::handle))
        .route("/spam/{ham_id}/ham", get(transform_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
