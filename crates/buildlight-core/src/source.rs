//! Status source abstraction.
//!
//! A `StatusSource` is the seam where CI server kinds plug in: anything
//! that can turn an endpoint and a project name into a [`ProjectStatus`]
//! can drive a [`Watcher`](crate::Watcher).

use async_trait::async_trait;

use crate::error::Result;
use crate::status::ProjectStatus;

/// Retrieves the activity and last build outcome for one project.
///
/// Guarantees:
/// - One call performs at most one read of the remote document.
/// - Project lookup is exact-match on the project identifier.
/// - Transport failures surface as `WatchError::Fetch`, malformed documents
///   as `WatchError::Parse`, and a missing project as
///   `WatchError::ProjectNotFound`. Nothing is retried or cached.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, endpoint: &str, project: &str) -> Result<ProjectStatus>;
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for std::sync::Arc<T> {
    async fn fetch_status(&self, endpoint: &str, project: &str) -> Result<ProjectStatus> {
        (**self).fetch_status(endpoint, project).await
    }
}
