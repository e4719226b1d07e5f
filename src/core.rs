//! Logger instances and the enabled-operations dispatch table
//!
//! Each `Logger` owns a table of function pointers, one per named operation.
//! Resolving a threshold rebuilds the whole table: operations whose required
//! rank exceeds the threshold are bound to a no-op, the rest to their real
//! formatters. The level comparison therefore happens once per threshold
//! change, never on the logging hot path.

use std::backtrace::Backtrace;
use std::sync::Arc;

use crate::args::LogArg;
use crate::config::{self, LevelSpec};
use crate::context::{self, ContextProvider};
use crate::error::LoggerError;
use crate::format::{
    self, CONSOLE_RESET, DEBUG_PRE, DUMP_PRE, ERR_PRE, INFO_PRE, LOG_PRE, NOTE_PRE, STEP_PRE,
    WARN_PRE, WIN_PRE,
};
use crate::levels::{LogOp, OP_LEVELS};
use crate::sink::{LogSink, StdoutSink};

/// Active implementation of one named operation.
type LogFn = fn(&Logger, &[LogArg]) -> Result<(), LoggerError>;

/// Leveled, prefix-decorated console logger.
///
/// Construct one per module or component. Instances are independent: each
/// carries its own module tag, threshold, and dispatch table, and changing
/// one never affects another.
pub struct Logger {
    module_prefix: String,
    threshold: i64,
    ops: [LogFn; LogOp::COUNT],
    context: ContextProvider,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger using the live process-wide default threshold.
    pub fn new(module: Option<&str>) -> Self {
        Self::build(module, None)
    }

    /// Create a logger with an explicit initial threshold (name or rank).
    pub fn with_level(module: Option<&str>, level: impl Into<LevelSpec>) -> Self {
        Self::build(module, Some(level.into()))
    }

    fn build(module: Option<&str>, level: Option<LevelSpec>) -> Self {
        let mut logger = Logger {
            module_prefix: module.map(|m| format!("[{m}]")).unwrap_or_default(),
            threshold: 0,
            ops: [noop; LogOp::COUNT],
            context: context::absent(),
            sink: Arc::new(StdoutSink),
        };
        logger.apply_level(level);
        logger
    }

    /// Change the threshold; returns the resolved rank now in effect.
    ///
    /// Accepts a severity name (case-insensitive), a numeric-like string, or
    /// a bare rank. Unrecognized names silently degrade to the live
    /// process-wide default. The dispatch table is rebuilt wholesale before
    /// this returns.
    pub fn set_level(&mut self, level: impl Into<LevelSpec>) -> i64 {
        self.apply_level(Some(level.into()))
    }

    fn apply_level(&mut self, level: Option<LevelSpec>) -> i64 {
        self.threshold = config::resolve_level(level);
        self.rebuild_ops();
        self.threshold
    }

    /// Rebind every operation according to the current threshold. O(k) over
    /// the operation map; no incremental patching.
    fn rebuild_ops(&mut self) {
        for (op, required) in OP_LEVELS {
            self.ops[op.index()] = if *required > self.threshold {
                noop
            } else {
                formatter_for(*op)
            };
        }
    }

    /// The threshold rank currently in effect.
    pub fn level(&self) -> i64 {
        self.threshold
    }

    /// Whether an operation is currently bound to its real implementation.
    pub fn is_enabled(&self, op: LogOp) -> bool {
        op.required_rank() <= self.threshold
    }

    /// Install the ambient request-id lookup used to decorate lines.
    pub fn set_context_provider(
        &mut self,
        provider: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) {
        self.context = Box::new(provider);
    }

    /// Redirect output to a different sink.
    pub fn set_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sink = sink;
    }

    // Named operations. Each dispatches through the table; a disabled
    // operation hits the no-op and returns Ok without touching its input.

    /// Fatal-rank notification (bright red).
    pub fn notify(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Notify, args)
    }

    /// Error-rank line (red).
    pub fn error(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Error, args)
    }

    /// Warn-rank line (black on yellow).
    pub fn warn(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Warn, args)
    }

    /// Info-rank line (magenta).
    pub fn info(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Info, args)
    }

    /// Info-rank progress step (blue).
    pub fn step(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Step, args)
    }

    /// Info-rank success line (green).
    pub fn win(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Win, args)
    }

    /// Debug-rank line (cyan).
    pub fn debug(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Debug, args)
    }

    /// Debug-rank line in the default console color.
    pub fn log(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Log, args)
    }

    /// Structured dump of exactly one value, pretty-printed.
    ///
    /// Unlike the other operations this writes prefix, value, and reset as
    /// three separate sink calls, so another writer can interleave inside
    /// it. Known limitation.
    pub fn dump(&self, value: impl Into<LogArg>) -> Result<(), LoggerError> {
        let arg = value.into();
        self.dispatch(LogOp::Dump, std::slice::from_ref(&arg))
    }

    /// Trace-rank line plus a captured call stack, in the error color. The
    /// stack and the reset code are written as separate trailing units.
    pub fn trace(&self, args: &[LogArg]) -> Result<(), LoggerError> {
        self.dispatch(LogOp::Trace, args)
    }

    fn dispatch(&self, op: LogOp, args: &[LogArg]) -> Result<(), LoggerError> {
        (self.ops[op.index()])(self, args)
    }

    fn prefix(&self, color: &str) -> String {
        format::line_prefix((self.context)(), &self.module_prefix, color)
    }

    /// Shared pipeline: prefix, rendered arguments, and the reset code are
    /// joined with single spaces and handed to the sink as one line.
    fn emit(&self, color: &str, args: &[LogArg]) -> Result<(), LoggerError> {
        let mut parts = Vec::with_capacity(args.len() + 2);
        parts.push(self.prefix(color));
        for arg in args {
            parts.push(arg.rendered()?);
        }
        parts.push(CONSOLE_RESET.to_string());
        self.sink.write_line(&parts.join(" "));
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(None)
    }
}

/// Bound in place of every operation the threshold disables. Accepts any
/// arguments, writes nothing, fails never.
fn noop(_logger: &Logger, _args: &[LogArg]) -> Result<(), LoggerError> {
    Ok(())
}

fn formatter_for(op: LogOp) -> LogFn {
    match op {
        LogOp::Notify => fmt_notify,
        LogOp::Error => fmt_error,
        LogOp::Warn => fmt_warn,
        LogOp::Info => fmt_info,
        LogOp::Step => fmt_step,
        LogOp::Win => fmt_win,
        LogOp::Debug => fmt_debug,
        LogOp::Log => fmt_log,
        LogOp::Dump => fmt_dump,
        LogOp::Trace => fmt_trace,
    }
}

fn fmt_notify(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(NOTE_PRE, args)
}

fn fmt_error(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(ERR_PRE, args)
}

fn fmt_warn(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(WARN_PRE, args)
}

fn fmt_info(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(INFO_PRE, args)
}

fn fmt_step(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(STEP_PRE, args)
}

fn fmt_win(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(WIN_PRE, args)
}

fn fmt_debug(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(DEBUG_PRE, args)
}

fn fmt_log(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.emit(LOG_PRE, args)
}

fn fmt_dump(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    logger.sink.write_line(&logger.prefix(DUMP_PRE));
    if let Some(value) = args.first() {
        logger.sink.write_line(&value.rendered_pretty()?);
    }
    logger.sink.write_line(CONSOLE_RESET);
    Ok(())
}

fn fmt_trace(logger: &Logger, args: &[LogArg]) -> Result<(), LoggerError> {
    let mut parts = Vec::with_capacity(args.len() + 2);
    parts.push(logger.prefix(ERR_PRE));
    parts.push("Trace:".to_string());
    for arg in args {
        parts.push(arg.rendered()?);
    }
    logger.sink.write_line(&parts.join(" "));
    logger.sink.write_line(&Backtrace::force_capture().to_string());
    logger.sink.write_line(CONSOLE_RESET);
    Ok(())
}
