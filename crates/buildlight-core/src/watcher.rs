//! One polling-and-decision cycle.

use tracing::{debug, warn};

use crate::error::{Result, WatchError};
use crate::interpret::interpret;
use crate::sink::IndicatorSink;
use crate::source::StatusSource;
use crate::status::IndicatorAction;

/// Identifies what a watcher watches.
///
/// Both fields are non-empty; [`WatcherConfig::new`] rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    endpoint: String,
    project: String,
}

impl WatcherConfig {
    /// Create a config for a project served at `endpoint`.
    pub fn new(endpoint: impl Into<String>, project: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let project = project.into();

        if endpoint.trim().is_empty() {
            return Err(WatchError::InvalidConfig(
                "endpoint must not be empty".to_string(),
            ));
        }
        if project.trim().is_empty() {
            return Err(WatchError::InvalidConfig(
                "project must not be empty".to_string(),
            ));
        }

        Ok(Self { endpoint, project })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

/// Glues a status source through [`interpret`] to an indicator sink.
///
/// Holds no state between cycles, so independent watchers can run
/// concurrently as long as their sources and sinks don't share mutable
/// resources.
pub struct Watcher<S, K> {
    config: WatcherConfig,
    source: S,
    sink: K,
}

impl<S: StatusSource, K: IndicatorSink> Watcher<S, K> {
    pub fn new(config: WatcherConfig, source: S, sink: K) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Run one cycle: fetch, interpret, signal.
    ///
    /// Exactly one fetch and, on success, exactly one sink call. Errors from
    /// the source are returned unchanged and no sink method is invoked.
    pub async fn watch_server(&self) -> Result<IndicatorAction> {
        debug!(
            endpoint = %self.config.endpoint,
            project = %self.config.project,
            "Fetching project status"
        );

        let status = self
            .source
            .fetch_status(&self.config.endpoint, &self.config.project)
            .await?;

        if !status.activity.is_recognized() {
            warn!(
                project = %self.config.project,
                activity = %status.activity,
                "Unrecognized activity, treating project as idle"
            );
        }
        if !status.outcome.is_recognized() {
            warn!(
                project = %self.config.project,
                outcome = %status.outcome,
                "Unrecognized build outcome, signalling warning"
            );
        }

        let action = interpret(&status.activity, &status.outcome);
        debug!(
            project = %self.config.project,
            activity = %status.activity,
            outcome = %status.outcome,
            %action,
            "Interpreted project status"
        );

        action.signal(&self.sink);
        Ok(action)
    }
}
