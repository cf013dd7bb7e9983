//! Shared domain types.

use serde::{Deserialize, Serialize};

/// Timestamp type used across the workspace (UTC, from chrono).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The direction of a sensor observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Entry,
    Exit,
}

impl EventKind {
    /// Occupancy delta applied by one event of this kind.
    pub fn delta(self) -> i64 {
        match self {
            EventKind::Entry => 1,
            EventKind::Exit => -1,
        }
    }

    /// Storage key form, used in the `events` and `sensor_cooldowns` tables.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Entry => "ENTRY",
            EventKind::Exit => "EXIT",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
