//! Engine configuration.

use crate::cooldown::DEFAULT_COOLDOWN_WINDOW_MS;

/// Configuration consumed by the occupancy transaction engine and the
/// write-path authentication check.
///
/// Passed explicitly into the engine rather than read from ambient process
/// state, so tests and alternate deployments can construct their own.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Suppression window for repeated (sensor, direction) triggers, in
    /// milliseconds (default: `1200`).
    pub cooldown_window_ms: i64,
    /// Shared secret required in the `x-api-key` header on the write path.
    /// `None` disables the check entirely — the write path is open. This
    /// fail-open default is deliberate (and risky); deployments that want an
    /// authenticated write path must set `API_KEY`.
    pub api_key: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cooldown_window_ms: DEFAULT_COOLDOWN_WINDOW_MS,
            api_key: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default          |
    /// |----------------------|------------------|
    /// | `COOLDOWN_WINDOW_MS` | `1200`           |
    /// | `API_KEY`            | unset (fail-open)|
    ///
    /// A malformed or negative `COOLDOWN_WINDOW_MS` falls back to the default
    /// instead of failing startup.
    pub fn from_env() -> Self {
        let cooldown_window_ms =
            parse_cooldown_window_ms(std::env::var("COOLDOWN_WINDOW_MS").ok().as_deref());

        let api_key = std::env::var("API_KEY").ok().filter(|k| !k.is_empty());

        Self {
            cooldown_window_ms,
            api_key,
        }
    }
}

/// Parse a cooldown window override, falling back to the default on any
/// missing, unparseable, or negative value.
fn parse_cooldown_window_ms(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|ms| *ms >= 0)
        .unwrap_or(DEFAULT_COOLDOWN_WINDOW_MS)
}
