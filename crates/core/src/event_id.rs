//! Event identifier generation.

use uuid::Uuid;

/// Prefix carried by every generated event id.
pub const EVENT_ID_PREFIX: &str = "evt_";

/// Generate a globally unique, opaque event identifier.
///
/// Pure local randomness (UUIDv4) with a structured prefix; no coordination
/// with other instances and no failure mode. The id is only a collision-free
/// key, not a secret.
pub fn new_event_id() -> String {
    format!("{EVENT_ID_PREFIX}{}", Uuid::new_v4().simple())
}
