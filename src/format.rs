//! Line prefix construction and ANSI color constants
//!
//! Every emitted line starts with `[pid][request-id?][epoch-millis][module?]`
//! followed by the severity's color-start code, and ends with the universal
//! reset code. The escape sequences are byte-exact constants; a line's shape
//! is always `color-start … arguments … reset`.

use chrono::Utc;
use once_cell::sync::Lazy;

pub const CONSOLE_RESET: &str = "\x1b[0m";
/// Error (red)
pub const ERR_PRE: &str = "\x1b[31m";
/// Notify (bright red)
pub const NOTE_PRE: &str = "\x1b[91m";
/// Info (magenta)
pub const INFO_PRE: &str = "\x1b[35m";
/// Success (green)
pub const WIN_PRE: &str = "\x1b[32m";
/// Log (default console color)
pub const LOG_PRE: &str = CONSOLE_RESET;
/// Debug (cyan)
pub const DEBUG_PRE: &str = "\x1b[36m";
/// Warn (black on yellow)
pub const WARN_PRE: &str = "\x1b[43m\x1b[30m";
/// Step (blue)
pub const STEP_PRE: &str = "\x1b[34m";
/// Structured dump (cyan)
pub const DUMP_PRE: &str = "\x1b[36m";

/// Process-identity tag, stable for the process lifetime.
static PID_PREFIX: Lazy<String> = Lazy::new(|| format!("[{}]", std::process::id()));

/// Assemble the left-hand prefix of one log line.
///
/// The request id is queried fresh on every call so the tag always reflects
/// the calling task's own ambient context at that moment.
pub(crate) fn line_prefix(request_id: Option<String>, module_prefix: &str, color: &str) -> String {
    let mut prefix = PID_PREFIX.clone();
    if let Some(id) = request_id {
        prefix.push('[');
        prefix.push_str(&id);
        prefix.push(']');
    }
    prefix.push('[');
    prefix.push_str(&Utc::now().timestamp_millis().to_string());
    prefix.push(']');
    prefix.push_str(module_prefix);
    prefix.push_str(color);
    prefix
}

/// Remove ANSI color codes from text. Test helper for asserting on line
/// content independent of severity coloring.
#[cfg(test)]
pub(crate) fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape && ch == 'm' {
            in_escape = false;
        } else if !in_escape {
            result.push(ch);
        }
    }
    result
}
