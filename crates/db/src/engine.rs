//! The occupancy transaction engine.
//!
//! Applies one validated sensor event atomically: lot lookup, cooldown
//! check, clamped count computation, immutable event insert, and status
//! upsert all happen inside a single Postgres transaction. Concurrent events
//! for the same lot serialize on a `FOR UPDATE` lock on the lot row, so the
//! final count always reflects every accepted delta in some serial order.
//!
//! The transaction body performs no I/O besides reads and writes through its
//! own handle, and either commits fully or rolls back fully: no partial
//! state (event without status update, or vice versa) is ever observable.

use chrono::Utc;
use sqlx::PgPool;

use lotwatch_core::config::EngineConfig;
use lotwatch_core::cooldown::{self, CooldownOutcome};
use lotwatch_core::event_id::new_event_id;
use lotwatch_core::occupancy::clamped_next;
use lotwatch_core::types::EventKind;
use lotwatch_core::validation::EventRequest;

/// Errors raised by [`OccupancyEngine::apply_event`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The lot does not exist; nothing was written.
    #[error("Unknown lotId: {lot_id}")]
    LotNotFound { lot_id: String },

    /// A freshly generated event id already exists. Cryptographically
    /// near-impossible, still enforced by the primary key.
    #[error("Event id collision: {id}")]
    Conflict { id: String },

    /// Transient store failure; the transaction was rolled back.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result of applying one sensor event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The event was recorded and the count updated.
    Applied { event_id: String, count: i64 },
    /// Suppressed duplicate inside the cooldown window. Only the cooldown
    /// record's timestamp was refreshed.
    Deduplicated { cooldown_ms: i64 },
}

pub struct OccupancyEngine;

impl OccupancyEngine {
    /// Atomically apply one sensor event to a lot.
    ///
    /// Steps (all inside one transaction):
    /// 1. Lock the lot row (`FOR UPDATE`); unknown lot aborts with
    ///    [`EngineError::LotNotFound`].
    /// 2. Classify against the cooldown record for (sensor, kind). A
    ///    duplicate refreshes the record's timestamp and commits — a
    ///    successful no-op extending the suppression window.
    /// 3. Otherwise upsert the cooldown record, read the current count
    ///    (0 when no status row exists), clamp `count + delta` into
    ///    `[0, capacity]`, insert the event row, and upsert the status row
    ///    with the new count and a fresh server timestamp.
    pub async fn apply_event(
        pool: &PgPool,
        config: &EngineConfig,
        request: &EventRequest,
        kind: EventKind,
    ) -> Result<ApplyOutcome, EngineError> {
        let now_ms = Utc::now().timestamp_millis();
        let window_ms = config.cooldown_window_ms;

        let mut tx = pool.begin().await?;

        // Lock the lot row for the duration of the transaction. This both
        // checks existence and serializes concurrent events for the lot.
        let lot: Option<(Option<i64>,)> =
            sqlx::query_as("SELECT capacity FROM lots WHERE id = $1 FOR UPDATE")
                .bind(&request.lot_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((capacity,)) = lot else {
            return Err(EngineError::LotNotFound {
                lot_id: request.lot_id.clone(),
            });
        };

        let last: Option<(i64,)> = sqlx::query_as(
            "SELECT last_event_at_ms FROM sensor_cooldowns
             WHERE lot_id = $1 AND sensor_id = $2 AND event_type = $3",
        )
        .bind(&request.lot_id)
        .bind(&request.sensor_id)
        .bind(kind.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = cooldown::classify(now_ms, last.map(|(ms,)| ms), window_ms);

        // Both paths refresh the cooldown record, so a rapid trigger train
        // keeps extending suppression.
        sqlx::query(
            "INSERT INTO sensor_cooldowns
                 (lot_id, sensor_id, event_type, last_event_at_ms, window_ms, updated_at)
             VALUES ($1, $2, $3, $4, $5, now())
             ON CONFLICT (lot_id, sensor_id, event_type)
             DO UPDATE SET last_event_at_ms = EXCLUDED.last_event_at_ms,
                           window_ms = EXCLUDED.window_ms,
                           updated_at = EXCLUDED.updated_at",
        )
        .bind(&request.lot_id)
        .bind(&request.sensor_id)
        .bind(kind.as_str())
        .bind(now_ms)
        .bind(window_ms)
        .execute(&mut *tx)
        .await?;

        if outcome == CooldownOutcome::Deduplicated {
            tx.commit().await?;
            tracing::debug!(
                lot_id = %request.lot_id,
                sensor_id = %request.sensor_id,
                kind = %kind,
                "Suppressed duplicate trigger inside cooldown window"
            );
            return Ok(ApplyOutcome::Deduplicated {
                cooldown_ms: window_ms,
            });
        }

        let current: Option<(i64,)> =
            sqlx::query_as("SELECT count FROM occupancy_status WHERE lot_id = $1")
                .bind(&request.lot_id)
                .fetch_optional(&mut *tx)
                .await?;
        let current = current.map_or(0, |(c,)| c);

        let next = clamped_next(current, kind.delta(), capacity);

        let event_id = new_event_id();
        sqlx::query(
            "INSERT INTO events (id, lot_id, sensor_id, event_type, created_at)
             VALUES ($1, $2, $3, $4, now())",
        )
        .bind(&event_id)
        .bind(&request.lot_id)
        .bind(&request.sensor_id)
        .bind(kind.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|err| classify_insert_error(err, &event_id))?;

        // Upsert leaves average_by_hour untouched; only the external batch
        // writes that column.
        sqlx::query(
            "INSERT INTO occupancy_status (lot_id, count, updated_at)
             VALUES ($1, $2, now())
             ON CONFLICT (lot_id)
             DO UPDATE SET count = EXCLUDED.count, updated_at = EXCLUDED.updated_at",
        )
        .bind(&request.lot_id)
        .bind(next)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            lot_id = %request.lot_id,
            sensor_id = %request.sensor_id,
            kind = %kind,
            count = next,
            event_id = %event_id,
            "Applied occupancy event"
        );

        Ok(ApplyOutcome::Applied {
            event_id,
            count: next,
        })
    }
}

/// Map a unique-violation on the events primary key to [`EngineError::Conflict`].
fn classify_insert_error(err: sqlx::Error, event_id: &str) -> EngineError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            return EngineError::Conflict {
                id: event_id.to_string(),
            };
        }
    }
    EngineError::Database(err)
}
