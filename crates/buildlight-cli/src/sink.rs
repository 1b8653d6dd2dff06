//! Indicator sink that reports actions on the terminal.

use buildlight_core::{IndicatorAction, IndicatorSink};
use tracing::info;

/// Logs every action and, unless disabled, prints a status line to stdout.
pub struct LogSink {
    project: String,
    print: bool,
}

impl LogSink {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            print: true,
        }
    }

    /// Keep stdout free, e.g. when cycle reports are emitted as JSON.
    pub fn log_only(mut self) -> Self {
        self.print = false;
        self
    }

    fn emit(&self, action: IndicatorAction) {
        info!(project = %self.project, %action, "Indicator updated");
        if self.print {
            println!("{}", status_line(&self.project, action));
        }
    }
}

fn status_line(project: &str, action: IndicatorAction) -> String {
    let label = match action {
        IndicatorAction::Success => "SUCCESS",
        IndicatorAction::Failure => "FAILURE",
        IndicatorAction::Warning => "WARNING",
        IndicatorAction::InProgress => "BUILDING",
    };
    format!("[{:<8}] {}", label, project)
}

impl IndicatorSink for LogSink {
    fn success(&self) {
        self.emit(IndicatorAction::Success);
    }

    fn failure(&self) {
        self.emit(IndicatorAction::Failure);
    }

    fn warning(&self) {
        self.emit(IndicatorAction::Warning);
    }

    fn building_in_progress(&self) {
        self.emit(IndicatorAction::InProgress);
    }
}
