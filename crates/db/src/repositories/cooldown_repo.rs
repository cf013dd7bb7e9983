//! Repository for the `sensor_cooldowns` table.
//!
//! Writes happen only inside the occupancy transaction; this repo exposes
//! the read side for diagnostics and tests.

use sqlx::PgPool;

use crate::models::cooldown::CooldownRecord;

const COLUMNS: &str = "lot_id, sensor_id, event_type, last_event_at_ms, window_ms, updated_at";

pub struct CooldownRepo;

impl CooldownRepo {
    /// Find the cooldown record for one (lot, sensor, direction) key.
    pub async fn find(
        pool: &PgPool,
        lot_id: &str,
        sensor_id: &str,
        event_type: &str,
    ) -> Result<Option<CooldownRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_cooldowns
             WHERE lot_id = $1 AND sensor_id = $2 AND event_type = $3"
        );
        sqlx::query_as::<_, CooldownRecord>(&query)
            .bind(lot_id)
            .bind(sensor_id)
            .bind(event_type)
            .fetch_optional(pool)
            .await
    }
}
