//! Progress notification port
//!
//! Lets the presentation layer show that a model call is in flight.

use desk_domain::Model;

/// Callback for the lifetime of a single model call
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait TurnProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_call_start(&self, model: &Model);

    /// Called once the call has returned or failed
    fn on_call_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {
    fn on_call_start(&self, _model: &Model) {}
    fn on_call_end(&self, _success: bool) {}
}
