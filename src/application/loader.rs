//! Project loading
//!
//! Fetches a payload from a [`ProjectSource`], checks the status, decodes it
//! and builds the tree. Every failure on the way is a load error; the caller
//! decides how to surface it.

use crate::domain::entities::{ProjectTree, ProjectsPayload};
use crate::domain::ports::ProjectSource;
use crate::error::{ProjectsError, ProjectsResult};

/// Fetch and build the project tree behind `url`
pub fn load_tree<S>(source: &S, url: &str) -> ProjectsResult<ProjectTree>
where
    S: ProjectSource + ?Sized,
{
    let response = source.fetch(url);
    if !response.is_success() {
        return Err(ProjectsError::Transport {
            url: response.url,
            status: response.status,
        });
    }

    let payload = ProjectsPayload::from_json(&response.body)?;
    if let Some(count) = payload.count {
        if count != payload.project.len() {
            tracing::debug!(
                declared = count,
                received = payload.project.len(),
                "projects payload count differs from records"
            );
        }
    }

    let tree = ProjectTree::build(payload.project)?;
    tracing::info!(url, projects = tree.len(), "projects loaded");
    Ok(tree)
}
