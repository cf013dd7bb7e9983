use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `true` when the service answers at all.
    pub ok: bool,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = lotwatch_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        ok: true,
        db_healthy,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
