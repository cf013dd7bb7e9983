//! Event entity model.

use lotwatch_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `events` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredEvent {
    pub id: String,
    pub lot_id: String,
    pub sensor_id: String,
    /// `"ENTRY"` or `"EXIT"` (storage key form of `EventKind`).
    pub event_type: String,
    pub created_at: Timestamp,
}
