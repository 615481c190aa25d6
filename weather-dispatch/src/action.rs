//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions must be `Clone + Debug + Send + 'static` so they can be logged
/// and sent back from spawned tasks.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering
    fn name(&self) -> &'static str;

    /// Short, log-friendly description of the action.
    ///
    /// Defaults to the `Debug` output. Override for actions carrying large
    /// payloads (API responses) so trace output stays readable.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }

    /// Whether this action fires often enough (timers, animation ticks) that
    /// its dispatch should only be traced at trace level.
    fn is_high_frequency(&self) -> bool {
        false
    }
}
