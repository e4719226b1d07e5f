//! Log-argument representation and stringification policy
//!
//! Structured values are rendered to a stable textual form so a log line
//! never contains an opaque reference-like token; error values keep their
//! own display form unchanged. A structured value that cannot be serialized
//! fails the logging call itself rather than being silently swallowed.

use serde::Serialize;
use serde_json::Value;

use crate::error::LoggerError;

/// One argument of a variadic logging call.
pub enum LogArg {
    /// Plain text; primitives convert here via `From`.
    Text(String),
    /// Structured value, serialized at emission time. Holds the outcome of
    /// converting the caller's value so a conversion failure surfaces from
    /// the logging call, not from argument construction.
    Json(Result<Value, serde_json::Error>),
    /// Error-type value, captured in its own display form and passed through
    /// the filter unchanged.
    Fault(String),
}

impl LogArg {
    /// Capture a structured value for later serialization.
    pub fn json<T: Serialize>(value: &T) -> LogArg {
        LogArg::Json(serde_json::to_value(value))
    }

    /// Capture an error-type value. Its display form is emitted as-is.
    pub fn error<E: std::fmt::Display>(err: &E) -> LogArg {
        LogArg::Fault(err.to_string())
    }

    /// Compact textual form used by the regular formatting pipeline.
    pub(crate) fn rendered(&self) -> Result<String, LoggerError> {
        match self {
            LogArg::Text(text) => Ok(text.clone()),
            LogArg::Fault(text) => Ok(text.clone()),
            LogArg::Json(Ok(value)) => {
                serde_json::to_string(value).map_err(|e| LoggerError::Serialization(e.to_string()))
            }
            LogArg::Json(Err(e)) => Err(LoggerError::Serialization(e.to_string())),
        }
    }

    /// Multi-line pretty form used by the structured-dump operation.
    pub(crate) fn rendered_pretty(&self) -> Result<String, LoggerError> {
        match self {
            LogArg::Json(Ok(value)) => serde_json::to_string_pretty(value)
                .map_err(|e| LoggerError::Serialization(e.to_string())),
            other => other.rendered(),
        }
    }
}

impl From<&str> for LogArg {
    fn from(text: &str) -> Self {
        LogArg::Text(text.to_string())
    }
}

impl From<String> for LogArg {
    fn from(text: String) -> Self {
        LogArg::Text(text)
    }
}

impl From<&String> for LogArg {
    fn from(text: &String) -> Self {
        LogArg::Text(text.clone())
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        LogArg::Json(Ok(value))
    }
}

impl From<&Value> for LogArg {
    fn from(value: &Value) -> Self {
        LogArg::Json(Ok(value.clone()))
    }
}

macro_rules! text_from_primitive {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogArg {
            fn from(value: $ty) -> Self {
                LogArg::Text(value.to_string())
            }
        })*
    };
}

text_from_primitive!(bool, i32, i64, u32, u64, usize, f32, f64);

/// Build a `&[LogArg]` slice from mixed argument expressions.
///
/// ```
/// use conlog::{log_args, Logger};
/// use serde_json::json;
///
/// let logger = Logger::new(Some("api"));
/// let _ = logger.info(log_args!["request accepted", json!({"route": "/x"})]);
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::LogArg::from($arg)),*][..]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn structured_values_render_as_stable_json() {
        let arg = LogArg::json(&json!({"b": 2, "a": 1}));
        // serde_json object keys are ordered, so the form is deterministic
        assert_eq!(arg.rendered().unwrap(), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn faults_keep_their_display_form() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let arg = LogArg::error(&err);
        assert_eq!(arg.rendered().unwrap(), "disk on fire");
    }

    #[test]
    fn serialization_failure_surfaces_at_render_time() {
        let arg = LogArg::json(&Unserializable);
        let err = arg.rendered().unwrap_err();
        assert!(matches!(err, LoggerError::Serialization(_)));
    }

    #[test]
    fn pretty_form_only_differs_for_structured_values() {
        let structured = LogArg::json(&json!({"a": 1}));
        assert!(structured.rendered_pretty().unwrap().contains('\n'));

        let text = LogArg::from("plain");
        assert_eq!(text.rendered_pretty().unwrap(), "plain");
    }

    #[test]
    fn log_args_macro_accepts_mixed_inputs() {
        let args = log_args!["count", 3i64, json!({"ok": true})];
        assert_eq!(args.len(), 3);
        assert_eq!(args[1].rendered().unwrap(), "3");
    }
}
