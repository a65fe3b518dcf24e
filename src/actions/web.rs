use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::actions::pipeline::{self, CardActionsQuery, QueryOutcome};
use crate::actions::types::CardActionsRequest;
use crate::web::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/card/actions", get(handle_card_actions))
        .route("/healthz", get(health))
        .with_state(state)
}

async fn handle_card_actions(
    State(state): State<AppState>,
    Query(request): Query<CardActionsRequest>,
) -> Response {
    let query = CardActionsQuery {
        user_id: request.user_id,
        card_number: request.card_number,
    };

    match pipeline::card_actions(state.directory.as_ref(), &state.policy, &query).await {
        Ok(QueryOutcome::Actions(response)) => Json(response).into_response(),
        Ok(QueryOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "CardNotFound" })),
        )
            .into_response(),
        Ok(QueryOutcome::Invalid(report)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "title": "ValidationFailed",
                "status": StatusCode::BAD_REQUEST.as_u16(),
                "errors": report.errors,
            })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
