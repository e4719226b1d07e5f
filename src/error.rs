use thiserror::Error;

/// Failures a logging call can surface to its caller.
///
/// Sink write problems are absorbed inside the sink and never reach here;
/// the only way an enabled operation fails is a structured argument that
/// cannot be serialized. That failure is deliberately not caught internally
/// so bad input is never silently masked.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("failed to serialize log argument: {0}")]
    Serialization(String),
}
