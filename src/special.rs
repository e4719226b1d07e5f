//! Convenience operations layered on the core API

use chrono::Local;
use serde_json::json;

use crate::args::LogArg;
use crate::core::Logger;
use crate::error::LoggerError;

impl Logger {
    /// Log the start of an incoming request through the info pipeline.
    ///
    /// Emits `Started '<method>' '<url>' at <calendar timestamp>` so request
    /// entry lines stay uniform without hand-building the message.
    pub fn request_start(&self, method: &str, url: &str) -> Result<(), LoggerError> {
        let timestamp = Local::now().format("%Y-%-m-%-d %H:%M:%S%.3f");
        let message = format!("Started '{method}' '{url}' at {timestamp}");
        self.info(&[LogArg::from(message)])
    }

    /// Exercise every logging operation with a representative nested
    /// structure. Reports pass/fail on stdout and never panics; returns
    /// whether all operations completed.
    pub fn self_test(&self) -> bool {
        let nested = json!({
            "l1": { "l2": { "l3Val": "val3", "l3": { "l4Val": { "val": "val" } } } }
        });

        println!("Testing basic methods");
        let outcome = self.run_all_ops(&nested);
        match outcome {
            Ok(()) => {
                println!("All basic tests passed!");
                true
            }
            Err(e) => {
                eprintln!("Basic test failed. Error:\n{e}");
                false
            }
        }
    }

    fn run_all_ops(&self, nested: &serde_json::Value) -> Result<(), LoggerError> {
        self.step(&["step invoked".into(), nested.into()])?;
        self.info(&["info invoked".into(), nested.into()])?;
        self.error(&["error called".into(), nested.into()])?;
        self.warn(&["warn called".into(), nested.into()])?;
        self.win(&["win called".into(), nested.into()])?;
        self.log(&["log called".into(), nested.into()])?;
        self.debug(&["debug called::".into(), nested.into()])?;
        self.notify(&["notify called".into(), nested.into()])?;
        self.trace(&["trace called".into(), nested.into()])?;
        self.dump(nested)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{strip_ansi_codes, INFO_PRE};
    use crate::levels::{INFO, TRACE, WARN};
    use crate::sink::MemorySink;
    use std::sync::Arc;

    fn captured(level: i64) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let mut logger = Logger::with_level(None, level);
        logger.set_sink(sink.clone());
        (logger, sink)
    }

    #[test]
    fn request_start_routes_through_info() {
        let (logger, sink) = captured(INFO);
        logger.request_start("GET", "/x").unwrap();
        logger.info(&["Started 'GET' '/x' at ".into()]).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(INFO_PRE), "uses the info severity color");

        // identical shape up to the timestamp
        let emitted = strip_ansi_codes(&lines[0]);
        let body = emitted
            .split_once("Started")
            .map(|(_, rest)| rest)
            .unwrap();
        assert!(body.starts_with(" 'GET' '/x' at "));
    }

    #[test]
    fn request_start_is_gated_like_info() {
        let (logger, sink) = captured(WARN);
        logger.request_start("POST", "/submit").unwrap();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn self_test_exercises_every_operation() {
        let (logger, sink) = captured(TRACE);
        assert!(logger.self_test());
        // eight single-line ops plus three units each for trace and dump
        assert_eq!(sink.lines().len(), 8 + 3 + 3);
    }

    #[test]
    fn self_test_reports_failure_without_panicking() {
        // a disabled logger still passes: no-ops cannot fail
        let (logger, sink) = captured(crate::levels::OFF);
        assert!(logger.self_test());
        assert!(sink.lines().is_empty());
    }
}
