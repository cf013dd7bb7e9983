use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use lotwatch_core::error::CoreError;
use lotwatch_db::engine::EngineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`EngineError`] for transaction
/// failures. Implements [`IntoResponse`] to produce the `{ok:false, error}`
/// JSON bodies with the status mapping: validation 400, auth 401, unknown
/// lot 404, everything else a sanitized 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lotwatch-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure inside the occupancy transaction.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A database error from sqlx (read path).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::LotNotFound { lot_id } => (
                    StatusCode::NOT_FOUND,
                    format!("Unknown lotId: {lot_id}"),
                ),
                CoreError::Conflict(msg) | CoreError::Store(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::Engine(engine) => match engine {
                EngineError::LotNotFound { lot_id } => (
                    StatusCode::NOT_FOUND,
                    format!("Unknown lotId: {lot_id}"),
                ),
                // An event-id collision should never occur in practice;
                // surface it as an unexpected 500, not a client error.
                EngineError::Conflict { id } => {
                    tracing::error!(event_id = %id, "Event id collision");
                    internal_error()
                }
                EngineError::Database(err) => {
                    tracing::error!(error = %err, "Transaction failed");
                    internal_error()
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
        };

        let body = json!({
            "ok": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 response pieces. Details stay in the logs.
fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
