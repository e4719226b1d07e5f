//! Output sink abstraction
//!
//! A sink receives whole logical output units. The regular severity
//! operations hand over one complete line per call, which keeps interleaving
//! risk low when several cooperative tasks share one stream; the trace and
//! dump operations write multiple units per call (see their docs).

use parking_lot::Mutex;
use std::io::{stderr, stdout, ErrorKind, Write};

/// Destination for formatted log output.
pub trait LogSink: Send + Sync {
    /// Write one logical output unit as a single call.
    fn write_line(&self, line: &str);
}

/// Default sink: standard output, flushed per line.
///
/// Write failures never propagate to logging callers: broken pipes are
/// ignored (the reader went away) and other errors are noted on stderr.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = stdout();
        if let Err(e) = writeln!(out, "{}", line) {
            if e.kind() != ErrorKind::BrokenPipe {
                let _ = writeln!(stderr(), "Logger stdout error: {}", e);
            }
            return;
        }
        let _ = out.flush();
    }
}

/// Capture sink holding every written unit in memory. Used by the test
/// suite and by embedders that need to assert on log output.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
