//! CCTray `cc.xml` document query.
//!
//! The feed looks like:
//!
//! ```xml
//! <Projects>
//!   <Project name="foo" activity="Sleeping" lastBuildStatus="Success"
//!            lastBuildLabel="42" webUrl="http://ci/job/foo/"/>
//! </Projects>
//! ```
//!
//! Only `name`, `activity` and `lastBuildStatus` are read.

use buildlight_core::{ProjectStatus, Result, WatchError};
use tracing::debug;

const ROOT_ELEMENT: &str = "Projects";
const PROJECT_ELEMENT: &str = "Project";
const NAME_ATTR: &str = "name";
const ACTIVITY_ATTR: &str = "activity";
const LAST_BUILD_STATUS_ATTR: &str = "lastBuildStatus";

fn parse_document(xml: &str) -> Result<roxmltree::Document<'_>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| WatchError::Parse(format!("invalid cc.xml: {}", e)))?;

    let root = doc.root_element();
    if !root.has_tag_name(ROOT_ELEMENT) {
        return Err(WatchError::Parse(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT,
            root.tag_name().name()
        )));
    }

    Ok(doc)
}

fn project_nodes<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> {
    doc.root_element()
        .children()
        .filter(|node| node.is_element() && node.has_tag_name(PROJECT_ELEMENT))
}

/// Find `project` in a cc.xml document and read its two status attributes.
///
/// The name must match exactly. If the feed lists the same name twice, the
/// first record wins.
pub fn find_project_status(xml: &str, project: &str) -> Result<ProjectStatus> {
    let doc = parse_document(xml)?;

    let node = project_nodes(&doc)
        .find(|node| node.attribute(NAME_ATTR) == Some(project))
        .ok_or_else(|| WatchError::ProjectNotFound {
            project: project.to_string(),
        })?;

    let required = |attr: &str| {
        node.attribute(attr).ok_or_else(|| {
            WatchError::Parse(format!(
                "project '{}' has no '{}' attribute",
                project, attr
            ))
        })
    };
    let activity = required(ACTIVITY_ATTR)?;
    let last_build_status = required(LAST_BUILD_STATUS_ATTR)?;

    debug!(project, activity, last_build_status, "Found project in cc.xml");
    Ok(ProjectStatus::from_raw(activity, last_build_status))
}

/// Names of every project listed in a cc.xml document, in document order.
pub fn project_names(xml: &str) -> Result<Vec<String>> {
    let doc = parse_document(xml)?;
    Ok(project_nodes(&doc)
        .filter_map(|node| node.attribute(NAME_ATTR))
        .map(str::to_string)
        .collect())
}
