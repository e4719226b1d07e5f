//! Process-wide logger configuration and threshold resolution
//!
//! The default threshold is resolved once, on first use, from the
//! `LOG_LEVEL` environment variable:
//! 1. Known severity name (case-insensitive) → its rank
//! 2. Parseable number → that number, unmodified
//! 3. Absent or unrecognized → the compiled-in default (`INFO`)
//!
//! The resolved value is *live*: `set_default_level` changes what every
//! later `Logger` construction without an explicit level uses, and what an
//! unrecognized severity name degrades to.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::env;

use crate::levels::{self, INFO};

/// Environment variable consulted once at process start.
pub const ENV_VAR_NAME: &str = "LOG_LEVEL";

/// Compiled-in default rank, used when the environment gives nothing usable.
pub const COMPILED_DEFAULT_LEVEL: i64 = INFO;

/// Live process-wide logger configuration.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub default_level: i64,
}

static CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| {
    RwLock::new(LoggerConfig {
        default_level: level_from_env(env::var(ENV_VAR_NAME).ok()),
    })
});

/// Resolve an environment-style override value to a rank.
///
/// Name lookup wins over numeric parsing, so `LOG_LEVEL=debug` and
/// `LOG_LEVEL=500` are equivalent.
fn level_from_env(raw: Option<String>) -> i64 {
    let Some(value) = raw else {
        return COMPILED_DEFAULT_LEVEL;
    };
    if let Some(rank) = levels::rank_of(&value) {
        return rank;
    }
    parse_numeric(&value).unwrap_or(COMPILED_DEFAULT_LEVEL)
}

/// Numeric-like values coerce to an integer rank; fractional input truncates.
fn parse_numeric(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed.parse::<f64>().ok().map(|f| f as i64)
}

/// Force the one-time environment read. Safe to call more than once.
pub fn init_from_env() {
    Lazy::force(&CONFIG);
}

/// Snapshot of the live configuration.
pub fn get_logger_config() -> LoggerConfig {
    CONFIG.read().clone()
}

/// The live process-wide default rank.
pub fn default_level() -> i64 {
    CONFIG.read().default_level
}

/// Override the live default rank (embedder configuration or environment
/// override simulation in tests). Affects future resolutions only; existing
/// logger instances keep their thresholds.
pub fn set_default_level(rank: i64) -> i64 {
    CONFIG.write().default_level = rank;
    rank
}

/// Threshold input: a severity name or a bare rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSpec {
    Name(String),
    Rank(i64),
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}

impl From<i64> for LevelSpec {
    fn from(rank: i64) -> Self {
        LevelSpec::Rank(rank)
    }
}

impl From<i32> for LevelSpec {
    fn from(rank: i32) -> Self {
        LevelSpec::Rank(rank as i64)
    }
}

impl From<u32> for LevelSpec {
    fn from(rank: u32) -> Self {
        LevelSpec::Rank(rank as i64)
    }
}

/// Resolve a threshold input to a rank.
///
/// Absent input falls back to the live default. Numeric input (including a
/// numeric-like name such as `"450"`) passes through with no bounds check.
/// An unrecognized name also falls back to the live default at call time,
/// not the compiled-in one.
pub(crate) fn resolve_level(spec: Option<LevelSpec>) -> i64 {
    match spec {
        None => default_level(),
        Some(LevelSpec::Rank(rank)) => rank,
        Some(LevelSpec::Name(name)) => {
            if let Some(rank) = parse_numeric(&name) {
                return rank;
            }
            match levels::rank_of(&name) {
                Some(rank) => rank,
                None => default_level(),
            }
        }
    }
}

/// Serializes tests that touch the live process-wide default.
#[cfg(test)]
pub(crate) static TEST_CONFIG_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{DEBUG, ERROR, TRACE, WARN};

    #[test]
    fn env_value_resolves_names_numbers_and_garbage() {
        assert_eq!(level_from_env(None), COMPILED_DEFAULT_LEVEL);
        assert_eq!(level_from_env(Some("debug".into())), DEBUG);
        assert_eq!(level_from_env(Some("TRACE".into())), TRACE);
        assert_eq!(level_from_env(Some("250".into())), 250);
        assert_eq!(level_from_env(Some("-10".into())), -10);
        assert_eq!(level_from_env(Some("450.9".into())), 450);
        assert_eq!(
            level_from_env(Some("chatty".into())),
            COMPILED_DEFAULT_LEVEL
        );
    }

    #[test]
    fn explicit_specs_resolve_without_bounds_checks() {
        assert_eq!(resolve_level(Some(LevelSpec::Rank(-5))), -5);
        assert_eq!(resolve_level(Some(LevelSpec::Rank(i64::MAX))), i64::MAX);
        assert_eq!(resolve_level(Some("warn".into())), WARN);
        assert_eq!(resolve_level(Some("ERROR".into())), ERROR);
        assert_eq!(resolve_level(Some("350".into())), 350);
    }

    #[test]
    fn unknown_names_degrade_to_the_live_default() {
        let _guard = TEST_CONFIG_GUARD.lock().unwrap();
        let original = default_level();

        set_default_level(DEBUG);
        assert_eq!(resolve_level(Some("bogus".into())), DEBUG);
        assert_eq!(resolve_level(None), DEBUG);

        // The live default moved again; unknown names follow it, they do not
        // snap back to the compiled-in default.
        set_default_level(ERROR);
        assert_eq!(resolve_level(Some("bogus".into())), ERROR);

        set_default_level(original);
    }
}
