//! Repository for the `occupancy_status` table.
//!
//! The counter itself is only ever written from inside the occupancy
//! transaction. `set_average_by_hour` is the write hook used by the external
//! analytics batch that computes hour-bucketed averages.

use sqlx::PgPool;

use crate::models::status::OccupancyStatus;

const COLUMNS: &str = "lot_id, count, average_by_hour, updated_at";

pub struct StatusRepo;

impl StatusRepo {
    /// Find the status row for a lot. `None` means no event has ever been
    /// accepted for the lot (count defaults to 0).
    pub async fn find_by_lot(
        pool: &PgPool,
        lot_id: &str,
    ) -> Result<Option<OccupancyStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM occupancy_status WHERE lot_id = $1");
        sqlx::query_as::<_, OccupancyStatus>(&query)
            .bind(lot_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a lot's hour-bucketed average map, creating the status row
    /// (count 0) if the lot has not seen any event yet. Returns the updated
    /// row.
    pub async fn set_average_by_hour(
        pool: &PgPool,
        lot_id: &str,
        average_by_hour: &serde_json::Value,
    ) -> Result<OccupancyStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO occupancy_status (lot_id, count, average_by_hour, updated_at)
             VALUES ($1, 0, $2, now())
             ON CONFLICT (lot_id)
             DO UPDATE SET average_by_hour = EXCLUDED.average_by_hour
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OccupancyStatus>(&query)
            .bind(lot_id)
            .bind(average_by_hour)
            .fetch_one(pool)
            .await
    }
}
