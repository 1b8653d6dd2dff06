//! Status vocabulary shared by sources, the interpreter and sinks.

use serde::Serialize;

/// Current CI server activity for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Activity {
    Sleeping,
    CheckingModifications,
    Building,
    /// Any value outside the known CCTray activities, kept verbatim.
    Unrecognized(String),
}

impl Activity {
    /// Map a raw attribute value. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Sleeping" => Activity::Sleeping,
            "CheckingModifications" => Activity::CheckingModifications,
            "Building" => Activity::Building,
            other => Activity::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Activity::Sleeping => "Sleeping",
            Activity::CheckingModifications => "CheckingModifications",
            Activity::Building => "Building",
            Activity::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Activity::Unrecognized(_))
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the most recently completed build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildOutcome {
    Success,
    Failure,
    Exception,
    /// Any value outside the known CCTray outcomes, kept verbatim.
    Unrecognized(String),
}

impl BuildOutcome {
    /// Map a raw attribute value. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Success" => BuildOutcome::Success,
            "Failure" => BuildOutcome::Failure,
            "Exception" => BuildOutcome::Exception,
            other => BuildOutcome::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BuildOutcome::Success => "Success",
            BuildOutcome::Failure => "Failure",
            BuildOutcome::Exception => "Exception",
            BuildOutcome::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, BuildOutcome::Unrecognized(_))
    }
}

impl std::fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two raw signals a source reports for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatus {
    pub activity: Activity,
    pub outcome: BuildOutcome,
}

impl ProjectStatus {
    pub fn new(activity: Activity, outcome: BuildOutcome) -> Self {
        Self { activity, outcome }
    }

    /// Build from raw attribute strings as they appear in a status document.
    pub fn from_raw(activity: &str, outcome: &str) -> Self {
        Self::new(Activity::parse(activity), BuildOutcome::parse(outcome))
    }
}

/// The single decision produced per watch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorAction {
    Success,
    Failure,
    Warning,
    InProgress,
}

impl IndicatorAction {
    #[cfg(test)]
    pub(crate) const ALL: [IndicatorAction; 4] = [
        IndicatorAction::Success,
        IndicatorAction::Failure,
        IndicatorAction::Warning,
        IndicatorAction::InProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorAction::Success => "success",
            IndicatorAction::Failure => "failure",
            IndicatorAction::Warning => "warning",
            IndicatorAction::InProgress => "in_progress",
        }
    }
}

impl std::fmt::Display for IndicatorAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
