use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::spam::use_cases::transform_to_ham::handler::TransformToHamError;
use crate::shell::http::ErrorResponse;
use crate::shell::state::AppState;

/// Serves both `/ham/{ham_id}` and `/spam/{ham_id}/ham`.
pub async fn handle(State(state): State<AppState>, Path(ham_id): Path<String>) -> impl IntoResponse {
    match state.transform_to_ham_handler.handle(&ham_id).await {
        Ok(transformation) => Json(transformation).into_response(),
        Err(err @ TransformToHamError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(err))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, %ham_id, "failed to load spam");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
