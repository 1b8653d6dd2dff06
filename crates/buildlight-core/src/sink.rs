//! Indicator sink contract.
//!
//! A sink is whatever drives the signaling device: a USB light, a sound,
//! a log line. The watcher only decides which method to call.

use crate::status::IndicatorAction;

/// Receiver of indicator actions.
///
/// Calls are fire-and-forget; a sink that can fail handles its own errors.
pub trait IndicatorSink: Send + Sync {
    fn success(&self);

    fn failure(&self);

    fn warning(&self);

    fn building_in_progress(&self);
}

impl<T: IndicatorSink + ?Sized> IndicatorSink for std::sync::Arc<T> {
    fn success(&self) {
        (**self).success()
    }

    fn failure(&self) {
        (**self).failure()
    }

    fn warning(&self) {
        (**self).warning()
    }

    fn building_in_progress(&self) {
        (**self).building_in_progress()
    }
}

impl IndicatorAction {
    /// Invoke the sink method matching this action, exactly once.
    pub fn signal(self, sink: &dyn IndicatorSink) {
        match self {
            IndicatorAction::Success => sink.success(),
            IndicatorAction::Failure => sink.failure(),
            IndicatorAction::Warning => sink.warning(),
            IndicatorAction::InProgress => sink.building_in_progress(),
        }
    }
}
