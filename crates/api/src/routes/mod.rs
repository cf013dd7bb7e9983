pub mod events;
pub mod health;
pub mod lots;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (all routes live at the root).
///
/// ```text
/// POST /event/entry          record an ENTRY event (authenticated)
/// POST /event/exit           record an EXIT event (authenticated)
///
/// GET  /lots                 all lots, metadata merged with status
/// GET  /lot/{lotId}          one lot, same shape
/// GET  /lot/{lotId}/status   status-only projection
/// GET  /lot/{lotId}/count    count-only projection
///
/// GET  /health               service + database health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(events::router())
        .merge(lots::router())
}
