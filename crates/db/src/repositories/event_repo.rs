//! Repository for the append-only `events` table.
//!
//! Inserts happen only inside the occupancy transaction (see
//! [`crate::engine`]); this repo provides the read side of the audit log.

use sqlx::PgPool;

use crate::models::event::StoredEvent;

const COLUMNS: &str = "id, lot_id, sensor_id, event_type, created_at";

pub struct EventRepo;

impl EventRepo {
    /// Find an event by its identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<StoredEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, StoredEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a lot's event log in arrival order.
    pub async fn list_for_lot(
        pool: &PgPool,
        lot_id: &str,
    ) -> Result<Vec<StoredEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE lot_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, StoredEvent>(&query)
            .bind(lot_id)
            .fetch_all(pool)
            .await
    }

    /// Count a lot's recorded events.
    pub async fn count_for_lot(pool: &PgPool, lot_id: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE lot_id = $1")
            .bind(lot_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
