//! Handlers for the authenticated write path: `POST /event/entry` and
//! `POST /event/exit`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use lotwatch_core::error::CoreError;
use lotwatch_core::types::EventKind;
use lotwatch_core::validation::validate_event_request;
use lotwatch_db::engine::{ApplyOutcome, OccupancyEngine};

use crate::error::AppResult;
use crate::middleware::api_key::ApiKeyAuth;
use crate::state::AppState;

/// POST /event/entry
pub async fn entry(
    state: State<AppState>,
    auth: ApiKeyAuth,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    apply(state, auth, body, EventKind::Entry).await
}

/// POST /event/exit
pub async fn exit(
    state: State<AppState>,
    auth: ApiKeyAuth,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    apply(state, auth, body, EventKind::Exit).await
}

/// Validate the body and run the occupancy transaction.
///
/// 201 with the new event id on the accepted path, 200 with the window on
/// the deduplicated path.
async fn apply(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    body: Result<Json<Value>, JsonRejection>,
    kind: EventKind,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(body) =
        body.map_err(|rej| CoreError::Validation(format!("Invalid JSON body: {rej}")))?;
    let request = validate_event_request(&body)?;

    let outcome =
        OccupancyEngine::apply_event(&state.pool, &state.config.engine, &request, kind).await?;

    let response = match outcome {
        ApplyOutcome::Applied { event_id, .. } => (
            StatusCode::CREATED,
            Json(json!({
                "ok": true,
                "id": event_id,
                "deduplicated": false,
            })),
        ),
        ApplyOutcome::Deduplicated { cooldown_ms } => (
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "deduplicated": true,
                "cooldown_ms": cooldown_ms,
            })),
        ),
    };
    Ok(response)
}
