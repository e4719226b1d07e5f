//! Severity scale and operation-to-level map
//!
//! Ranks are ordered integers (higher rank = chattier level). A logging
//! operation is enabled when its required rank is less than or equal to the
//! instance threshold. `OFF` and `ALL` are sentinels sitting below and above
//! every named severity.

/// Disable every operation.
pub const OFF: i64 = 0;
pub const FATAL: i64 = 100;
pub const ERROR: i64 = 200;
pub const WARN: i64 = 300;
pub const INFO: i64 = 400;
pub const DEBUG: i64 = 500;
pub const TRACE: i64 = 600;
/// Enable every operation.
pub const ALL: i64 = i64::MAX;

/// Process-wide severity scale, ordered by rank. Immutable; exposed for
/// introspection and testing.
pub const LOG_LEVELS: &[(&str, i64)] = &[
    ("OFF", OFF),
    ("FATAL", FATAL),
    ("ERROR", ERROR),
    ("WARN", WARN),
    ("INFO", INFO),
    ("DEBUG", DEBUG),
    ("TRACE", TRACE),
    ("ALL", ALL),
];

/// Look up a severity name (case-insensitive) in the scale.
pub fn rank_of(name: &str) -> Option<i64> {
    let upper = name.trim().to_uppercase();
    LOG_LEVELS
        .iter()
        .find(|(level, _)| *level == upper)
        .map(|(_, rank)| *rank)
}

/// Named logging operations. Each is bound per-instance to its real
/// formatter or to a no-op, depending on the instance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogOp {
    Notify,
    Error,
    Warn,
    Info,
    Step,
    Win,
    Debug,
    Log,
    Dump,
    Trace,
}

impl LogOp {
    pub const COUNT: usize = 10;

    /// All operations, in dispatch-table order.
    pub const ALL_OPS: [LogOp; Self::COUNT] = [
        LogOp::Notify,
        LogOp::Error,
        LogOp::Warn,
        LogOp::Info,
        LogOp::Step,
        LogOp::Win,
        LogOp::Debug,
        LogOp::Log,
        LogOp::Dump,
        LogOp::Trace,
    ];

    /// Position in the per-instance dispatch table.
    pub(crate) fn index(self) -> usize {
        match self {
            LogOp::Notify => 0,
            LogOp::Error => 1,
            LogOp::Warn => 2,
            LogOp::Info => 3,
            LogOp::Step => 4,
            LogOp::Win => 5,
            LogOp::Debug => 6,
            LogOp::Log => 7,
            LogOp::Dump => 8,
            LogOp::Trace => 9,
        }
    }

    /// Get string representation for introspection
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOp::Notify => "notify",
            LogOp::Error => "error",
            LogOp::Warn => "warn",
            LogOp::Info => "info",
            LogOp::Step => "step",
            LogOp::Win => "win",
            LogOp::Debug => "debug",
            LogOp::Log => "log",
            LogOp::Dump => "dump",
            LogOp::Trace => "trace",
        }
    }

    /// Minimum rank a threshold must reach to enable this operation.
    pub fn required_rank(self) -> i64 {
        OP_LEVELS[self.index()].1
    }
}

impl std::fmt::Display for LogOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide operation → required-rank map. Several operations share a
/// rank (`info`/`step`/`win`, `debug`/`log`/`dump`). Immutable; exposed for
/// introspection and testing.
pub const OP_LEVELS: &[(LogOp, i64)] = &[
    (LogOp::Notify, FATAL),
    (LogOp::Error, ERROR),
    (LogOp::Warn, WARN),
    (LogOp::Info, INFO),
    (LogOp::Step, INFO),
    (LogOp::Win, INFO),
    (LogOp::Debug, DEBUG),
    (LogOp::Log, DEBUG),
    (LogOp::Dump, DEBUG),
    (LogOp::Trace, TRACE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_strictly_increasing() {
        for pair in LOG_LEVELS.windows(2) {
            assert!(
                pair[0].1 < pair[1].1,
                "{} must rank below {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn sentinels_bracket_named_levels() {
        assert!(OFF < FATAL);
        assert!(ALL > TRACE);
    }

    #[test]
    fn rank_lookup_is_case_insensitive() {
        assert_eq!(rank_of("warn"), Some(WARN));
        assert_eq!(rank_of("Warn"), Some(WARN));
        assert_eq!(rank_of(" TRACE "), Some(TRACE));
        assert_eq!(rank_of("nope"), None);
    }

    #[test]
    fn op_map_covers_every_operation_once() {
        assert_eq!(OP_LEVELS.len(), LogOp::COUNT);
        for (i, op) in LogOp::ALL_OPS.iter().enumerate() {
            assert_eq!(op.index(), i);
            assert_eq!(OP_LEVELS[i].0, *op);
        }
    }

    #[test]
    fn shared_ranks_match_the_map() {
        assert_eq!(LogOp::Info.required_rank(), LogOp::Step.required_rank());
        assert_eq!(LogOp::Info.required_rank(), LogOp::Win.required_rank());
        assert_eq!(LogOp::Debug.required_rank(), LogOp::Log.required_rank());
        assert_eq!(LogOp::Debug.required_rank(), LogOp::Dump.required_rank());
    }
}
