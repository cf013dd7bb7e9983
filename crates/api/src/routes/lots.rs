use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the read-path routes (unauthenticated, CORS-open).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lots", get(handlers::lots::list))
        .route("/lot/{lot_id}", get(handlers::lots::detail))
        .route("/lot/{lot_id}/status", get(handlers::lots::status))
        .route("/lot/{lot_id}/count", get(handlers::lots::count))
}
