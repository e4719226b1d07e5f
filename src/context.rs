//! Request-context capability
//!
//! The only polymorphic seam in the logger: an ambient lookup that yields
//! the current request identifier, queried fresh on every emitted line. The
//! default provider always reports "no request", so a bare logger decorates
//! nothing. Servers install a provider reading their per-request store
//! (task-local, thread-local, or similar); the provider must return the
//! context of the calling task at the moment of the call, never a stale one.

/// Ambient request-id lookup. Must be cheap and callable from any task.
pub type ContextProvider = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Provider used when none is installed.
pub(crate) fn absent() -> ContextProvider {
    Box::new(|| None)
}
