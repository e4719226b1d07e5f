//! Leveled, prefix-decorated console logging for request-handling services
//!
//! Each [`Logger`] emits color-coded, severity-tagged lines to standard
//! output, gated by a numeric threshold. Instead of checking the threshold
//! on every call, a logger keeps a dispatch table binding each named
//! operation to its real formatter or to a no-op; the table is rebuilt
//! whenever the threshold changes. Lines are prefixed with the process id,
//! an optional ambient request id, a millisecond timestamp, and the module
//! tag.
//!
//! ## Usage
//!
//! ```
//! use conlog::{log_args, Logger};
//! use serde_json::json;
//!
//! let mut logger = Logger::with_level(Some("api"), "DEBUG");
//! let _ = logger.info(log_args!["listening on", 8080]);
//! let _ = logger.debug(log_args!["config", json!({"workers": 4})]);
//! let _ = logger.request_start("GET", "/health");
//!
//! logger.set_level("WARN");
//! let _ = logger.info(log_args!["now a no-op"]);
//! ```
//!
//! ## Initialization
//!
//! The process-wide default threshold comes from the `LOG_LEVEL`
//! environment variable (severity name or bare number, `INFO` otherwise)
//! and is read once. Call [`init`] at startup to force that read at a
//! predictable point:
//!
//! ```
//! conlog::init();
//! ```
//!
//! ## Request decoration
//!
//! Servers install a context provider returning the identifier of the
//! request currently in flight; every line queries it fresh:
//!
//! ```
//! # let mut logger = conlog::Logger::new(None);
//! logger.set_context_provider(|| None); // e.g. read a task-local store
//! ```

mod args;
mod config;
mod context;
mod core;
mod error;
mod format;
mod levels;
mod sink;
mod special;

pub use args::LogArg;
pub use config::{
    default_level, get_logger_config, set_default_level, LevelSpec, LoggerConfig,
    COMPILED_DEFAULT_LEVEL, ENV_VAR_NAME,
};
pub use context::ContextProvider;
pub use crate::core::Logger;
pub use error::LoggerError;
pub use format::CONSOLE_RESET;
pub use levels::{LogOp, ALL, DEBUG, ERROR, FATAL, INFO, LOG_LEVELS, OFF, OP_LEVELS, TRACE, WARN};
pub use sink::{LogSink, MemorySink, StdoutSink};

/// Resolve the process-wide default threshold from the environment.
///
/// Safe to call more than once; only the first resolution reads the
/// environment. Logging without calling this still works — the read happens
/// lazily on first use.
pub fn init() {
    config::init_from_env();
}
