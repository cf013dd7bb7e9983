//! Occupancy status entity model.

use lotwatch_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `occupancy_status` table: the mutable per-lot counter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OccupancyStatus {
    pub lot_id: String,
    pub count: i64,
    /// Hour bucket ("0".."23") to average occupied spaces. Written by the
    /// external analytics batch, served as-is by the read projection.
    pub average_by_hour: serde_json::Value,
    pub updated_at: Timestamp,
}
