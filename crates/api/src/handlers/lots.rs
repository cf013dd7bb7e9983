//! Handlers for the unauthenticated read path.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use lotwatch_core::error::CoreError;
use lotwatch_db::projection;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /lots
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let lots = projection::list_lots(&state.pool).await?;
    Ok(Json(json!({ "ok": true, "lots": lots })))
}

/// GET /lot/{lotId}
pub async fn detail(
    State(state): State<AppState>,
    Path(lot_id): Path<String>,
) -> AppResult<Json<Value>> {
    let lot = projection::lot_detail(&state.pool, &lot_id)
        .await?
        .ok_or(CoreError::LotNotFound { lot_id })?;
    Ok(Json(json!({ "ok": true, "lot": lot })))
}

/// GET /lot/{lotId}/status
pub async fn status(
    State(state): State<AppState>,
    Path(lot_id): Path<String>,
) -> AppResult<Json<Value>> {
    let status = projection::lot_status(&state.pool, &lot_id)
        .await?
        .ok_or(CoreError::LotNotFound { lot_id })?;
    Ok(Json(json!({
        "ok": true,
        "lotId": status.lot_id,
        "count_now": status.count_now,
        "last_updated": status.last_updated,
    })))
}

/// GET /lot/{lotId}/count
pub async fn count(
    State(state): State<AppState>,
    Path(lot_id): Path<String>,
) -> AppResult<Json<Value>> {
    let status = projection::lot_status(&state.pool, &lot_id)
        .await?
        .ok_or(CoreError::LotNotFound { lot_id })?;
    Ok(Json(json!({
        "ok": true,
        "lotId": status.lot_id,
        "count_now": status.count_now,
    })))
}
