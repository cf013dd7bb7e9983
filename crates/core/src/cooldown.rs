//! Cooldown classification for bursty sensor triggers.
//!
//! A vehicle rolling over an entry loop can fire the sensor several times in
//! one pass. Repeated triggers from the same (sensor, direction) pair inside
//! the cooldown window are suppressed: the cooldown record's timestamp is
//! refreshed (so a rapid trigger train keeps extending suppression) but no
//! event is recorded and the count does not change.

/// Default suppression window in milliseconds.
pub const DEFAULT_COOLDOWN_WINDOW_MS: i64 = 1200;

/// Result of classifying an incoming trigger against the cooldown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownOutcome {
    /// Record the event and apply the occupancy delta.
    Accepted,
    /// Suppressed duplicate: refresh the cooldown record only. A successful
    /// no-op, not an error.
    Deduplicated,
}

/// Classify a trigger at `now_ms` against the last recorded trigger for the
/// same (sensor, event kind) key.
///
/// The first-ever trigger for a key is always accepted. A trigger is a
/// duplicate when `now - last < window_ms`; a gap of exactly the window is
/// accepted.
pub fn classify(now_ms: i64, last_event_at_ms: Option<i64>, window_ms: i64) -> CooldownOutcome {
    match last_event_at_ms {
        Some(last) if now_ms.saturating_sub(last) < window_ms => CooldownOutcome::Deduplicated,
        _ => CooldownOutcome::Accepted,
    }
}
