use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the write-path routes. The event kind comes from the route, never
/// from the request body.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/event/entry", post(handlers::events::entry))
        .route("/event/exit", post(handlers::events::exit))
}
