//! Cooldown record entity model.

use lotwatch_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sensor_cooldowns` table: last-trigger state for one
/// (lot, sensor, direction) key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CooldownRecord {
    pub lot_id: String,
    pub sensor_id: String,
    pub event_type: String,
    /// Epoch milliseconds of the most recent trigger (accepted or suppressed).
    pub last_event_at_ms: i64,
    /// Window that was in force when the record was last written.
    pub window_ms: i64,
    pub updated_at: Timestamp,
}
