//! HTTP request handlers

use super::types::ErrorResponse;
use super::AppState;
use crate::wire::{self, ParseError, TurnResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::Instrument;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Every turn arrives on the root
        .route("/", post(handle_turn))
        .with_state(state)
}

// ============================================================
// Turn Handling
// ============================================================

async fn handle_turn(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TurnResponse>, AppError> {
    let turn_id = uuid::Uuid::new_v4();

    let request = wire::parse(&body).map_err(|e| {
        tracing::warn!(turn_id = %turn_id, error = %e, "Rejecting malformed request");
        AppError::from(e)
    })?;

    let span = tracing::info_span!(
        "turn",
        turn_id = %turn_id,
        intent = %request.intent_name,
        new_session = request.is_new_session,
        state = tracing::field::Empty,
    );
    let result = state.router.route(&request).instrument(span).await;

    Ok(Json(wire::render(&result)))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
