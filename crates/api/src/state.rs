use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (the pool is already `Clone`, config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lotwatch_db::DbPool,
    /// Server configuration, including the engine config (cooldown window,
    /// shared secret).
    pub config: Arc<ServerConfig>,
}
