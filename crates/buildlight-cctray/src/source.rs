//! `StatusSource` for CruiseControl-style `cc.xml` feeds.

use async_trait::async_trait;
use buildlight_core::{ProjectStatus, Result, StatusSource};

use crate::cc_xml::{find_project_status, project_names};
use crate::fetcher::{DocumentFetcher, HttpFetcher};

/// Reads project status from a CCTray feed: one fetch, one query.
///
/// Works with any server that publishes cc.xml (CruiseControl, Jenkins,
/// GoCD, TeamCity and others).
pub struct CcTraySource<F> {
    fetcher: F,
}

impl<F: DocumentFetcher> CcTraySource<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// List the project names the feed at `endpoint` publishes.
    pub async fn list_projects(&self, endpoint: &str) -> Result<Vec<String>> {
        let xml = self.fetcher.fetch(endpoint).await?;
        project_names(&xml)
    }
}

impl CcTraySource<HttpFetcher> {
    /// Source over HTTP with the given request timeout.
    pub fn http(timeout: std::time::Duration) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(timeout)?))
    }
}

#[async_trait]
impl<F: DocumentFetcher> StatusSource for CcTraySource<F> {
    async fn fetch_status(&self, endpoint: &str, project: &str) -> Result<ProjectStatus> {
        let xml = self.fetcher.fetch(endpoint).await?;
        find_project_status(&xml, project)
    }
}
