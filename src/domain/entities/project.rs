//! Project entities
//!
//! `ProjectRecord` is the raw record delivered by a source; `ProjectNode` is the
//! indexed node owned by a `ProjectTree`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectId;
use crate::error::{ProjectsError, ProjectsResult};

/// Separator between ancestor names in a node's full path
pub const PATH_SEPARATOR: &str = "::";

/// Raw project record as delivered by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    /// Ignored for the first (root) record
    #[serde(default, alias = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<ProjectId>,
    pub name: String,
}

impl ProjectRecord {
    pub fn new(id: impl Into<ProjectId>, parent: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_project_id: parent.map(ProjectId::from),
            name: name.into(),
        }
    }

    pub fn root(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self::new(id, None, name)
    }
}

/// Response body of the projects endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub project: Vec<ProjectRecord>,
}

impl ProjectsPayload {
    /// Decode a response body. Any decoding failure is reported as the fixed
    /// parse error so hosts show a stable message.
    pub fn from_json(body: &str) -> ProjectsResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            tracing::debug!(error = %e, "projects payload rejected");
            ProjectsError::parse()
        })
    }
}

/// Node of a built project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    pub id: ProjectId,
    pub name: String,
    /// `None` only for the root
    pub parent_id: Option<ProjectId>,
    /// Root = 0
    pub level: usize,
    /// Lowercased `::`-joined ancestor chain; empty for the root
    pub full_path: String,
    /// Children in insertion order
    pub children: Vec<ProjectId>,
}

impl ProjectNode {
    pub(crate) fn root(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            parent_id: None,
            level: 0,
            full_path: String::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn child_of(parent: &ProjectNode, record: ProjectRecord) -> Self {
        let full_path = format!(
            "{}{}{}",
            parent.full_path,
            PATH_SEPARATOR,
            record.name.to_lowercase()
        );
        Self {
            id: record.id,
            name: record.name,
            parent_id: Some(parent.id.clone()),
            level: parent.level + 1,
            full_path,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
