//! Error types for watcher operations

use thiserror::Error;

/// Errors surfaced by a watch cycle.
///
/// The core never recovers from these locally; they propagate out of
/// [`Watcher::watch_server`](crate::Watcher::watch_server) unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// Transport failure reaching the status endpoint
    #[error("Failed to fetch status document: {0}")]
    Fetch(String),

    /// Malformed or unexpected status document
    #[error("Failed to parse status document: {0}")]
    Parse(String),

    /// The document is valid but has no record for the project
    #[error("Project not found in status document: {project}")]
    ProjectNotFound { project: String },

    /// Watcher configuration is incomplete
    #[error("Invalid watcher configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;
