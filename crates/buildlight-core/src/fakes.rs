//! In-memory fakes for the watcher seams (testing only)
//!
//! Provides `StaticStatusSource` and `RecordingSink` that satisfy the
//! `StatusSource` and `IndicatorSink` contracts without any network or
//! hardware.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, WatchError};
use crate::sink::IndicatorSink;
use crate::source::StatusSource;
use crate::status::{IndicatorAction, ProjectStatus};

// ---------------------------------------------------------------------------
// StaticStatusSource
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum Reply {
    Any(ProjectStatus),
    Projects(HashMap<String, ProjectStatus>),
    Fail(WatchError),
}

/// Status source that answers from a fixed table and records its calls.
#[derive(Debug)]
pub struct StaticStatusSource {
    reply: Reply,
    requests: Mutex<Vec<(String, String)>>,
}

impl StaticStatusSource {
    /// Answer every project with the same status.
    pub fn single(status: ProjectStatus) -> Self {
        Self::with_reply(Reply::Any(status))
    }

    /// Answer only the named projects; others fail with `ProjectNotFound`.
    pub fn with_projects<I, N>(projects: I) -> Self
    where
        I: IntoIterator<Item = (N, ProjectStatus)>,
        N: Into<String>,
    {
        let projects = projects
            .into_iter()
            .map(|(name, status)| (name.into(), status))
            .collect();
        Self::with_reply(Reply::Projects(projects))
    }

    /// Fail every call with the given error.
    pub fn failing(error: WatchError) -> Self {
        Self::with_reply(Reply::Fail(error))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of `fetch_status` calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The `(endpoint, project)` of the most recent call.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl StatusSource for StaticStatusSource {
    async fn fetch_status(&self, endpoint: &str, project: &str) -> Result<ProjectStatus> {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_string(), project.to_string()));

        match &self.reply {
            Reply::Any(status) => Ok(status.clone()),
            Reply::Projects(projects) => {
                projects
                    .get(project)
                    .cloned()
                    .ok_or_else(|| WatchError::ProjectNotFound {
                        project: project.to_string(),
                    })
            }
            Reply::Fail(error) => Err(error.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// Indicator sink that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<IndicatorAction>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every action received, oldest first.
    pub fn calls(&self) -> Vec<IndicatorAction> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, action: IndicatorAction) {
        self.calls.lock().unwrap().push(action);
    }
}

impl IndicatorSink for RecordingSink {
    fn success(&self) {
        self.record(IndicatorAction::Success);
    }

    fn failure(&self) {
        self.record(IndicatorAction::Failure);
    }

    fn warning(&self) {
        self.record(IndicatorAction::Warning);
    }

    fn building_in_progress(&self) {
        self.record(IndicatorAction::InProgress);
    }
}
