//! Read projection: merged lot metadata + occupancy status.
//!
//! Pure reads with no transaction. Missing status rows become zero/null/empty
//! defaults rather than errors, so a known-but-unused lot always answers.

use lotwatch_core::types::Timestamp;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// One lot as served on the read path: metadata merged with current status
/// and the hour-bucketed average map.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotSnapshot {
    pub id: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// 0 on the wire when the lot has no configured capacity.
    pub capacity: i64,
    pub count_now: i64,
    pub last_updated: Option<Timestamp>,
    #[serde(rename = "averageByHour")]
    pub average_by_hour: serde_json::Value,
    pub permit: String,
    pub description: String,
}

/// Narrow status-only projection for one lot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotStatusSnapshot {
    #[serde(rename = "lotId")]
    pub lot_id: String,
    pub count_now: i64,
    pub last_updated: Option<Timestamp>,
}

const SNAPSHOT_QUERY: &str = "SELECT l.id, l.name, l.latitude, l.longitude,
        COALESCE(l.capacity, 0) AS capacity,
        COALESCE(s.count, 0) AS count_now,
        s.updated_at AS last_updated,
        COALESCE(s.average_by_hour, '{}'::jsonb) AS average_by_hour,
        l.permit, l.description
     FROM lots l
     LEFT JOIN occupancy_status s ON s.lot_id = l.id";

/// Fetch the merged snapshot for one lot. `None` when the lot is unknown.
pub async fn lot_detail(pool: &PgPool, lot_id: &str) -> Result<Option<LotSnapshot>, sqlx::Error> {
    let query = format!("{SNAPSHOT_QUERY} WHERE l.id = $1");
    sqlx::query_as::<_, LotSnapshot>(&query)
        .bind(lot_id)
        .fetch_optional(pool)
        .await
}

/// Fetch merged snapshots for all lots, ordered by lot id.
pub async fn list_lots(pool: &PgPool) -> Result<Vec<LotSnapshot>, sqlx::Error> {
    let query = format!("{SNAPSHOT_QUERY} ORDER BY l.id");
    sqlx::query_as::<_, LotSnapshot>(&query).fetch_all(pool).await
}

/// Fetch the status-only projection for one lot. `None` when the lot is
/// unknown; a known lot with no status row answers with count 0.
pub async fn lot_status(
    pool: &PgPool,
    lot_id: &str,
) -> Result<Option<LotStatusSnapshot>, sqlx::Error> {
    sqlx::query_as::<_, LotStatusSnapshot>(
        "SELECT l.id AS lot_id,
                COALESCE(s.count, 0) AS count_now,
                s.updated_at AS last_updated
         FROM lots l
         LEFT JOIN occupancy_status s ON s.lot_id = l.id
         WHERE l.id = $1",
    )
    .bind(lot_id)
    .fetch_optional(pool)
    .await
}
