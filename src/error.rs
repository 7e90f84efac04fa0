//! Error types for the project picker
//!
//! Uses `thiserror` for library errors. Load-path errors (`Transport`, `Parse`,
//! `MalformedHierarchy`) are reported to the host through a single view hook;
//! everything else is returned to the caller.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::ProjectId;

/// Result type alias for project picker operations
pub type ProjectsResult<T> = Result<T, ProjectsError>;

/// Main error type for project picker operations
#[derive(Error, Debug)]
pub enum ProjectsError {
    /// Non-2xx response (status 0 when no response arrived at all)
    #[error("Server \"{url}\" returned status {status}")]
    Transport { url: String, status: u16 },

    /// Response body is not a valid projects payload
    #[error("{message}")]
    Parse { message: String },

    /// A record references a parent that has not been seen yet
    #[error("project '{id}' references unknown parent '{parent_id}'")]
    MalformedHierarchy { id: ProjectId, parent_id: ProjectId },

    /// A non-root record carries no parent reference
    #[error("project '{id}' has no parent - only the first record may be the root")]
    MissingParent { id: ProjectId },

    /// The same id appears twice in one payload
    #[error("duplicate project id '{id}'")]
    DuplicateProject { id: ProjectId },

    /// Payload contains no root record
    #[error("projects payload is empty - expected at least a root project")]
    EmptyPayload,

    /// Operation referenced an id absent from the tree
    #[error("project '{id}' not found")]
    NotFound { id: ProjectId },

    /// The tree root cannot be detached
    #[error("project '{id}' is the tree root and cannot be removed")]
    CannotRemoveRoot { id: ProjectId },

    /// Filter text could not be compiled into a pattern
    #[error("invalid filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    /// Render template references an unknown field
    #[error("invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error outside of payload parsing (selection state files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectsError {
    /// Message used when a response body cannot be decoded
    pub const CAN_NOT_PARSE_RESPONSE: &'static str = "Error while parse response";

    pub fn parse() -> Self {
        ProjectsError::Parse {
            message: Self::CAN_NOT_PARSE_RESPONSE.to_string(),
        }
    }

    /// Whether this error belongs to the load path (reported via the view hook)
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ProjectsError::Transport { .. }
                | ProjectsError::Parse { .. }
                | ProjectsError::MalformedHierarchy { .. }
                | ProjectsError::MissingParent { .. }
                | ProjectsError::DuplicateProject { .. }
                | ProjectsError::EmptyPayload
        )
    }
}
