//! View Implementations
//!
//! Provides concrete implementations of ProjectsView:
//! - TextView: indented listing for terminals
//! - JsonView: NDJSON output for automation
//! - RecordingView: in-memory call log

mod json;
mod recording;
mod template;
mod text;

pub use json::JsonView;
pub use recording::{RecordingView, ViewCall};
pub use template::{escape_html, ProjectTemplate, DEFAULT_TEMPLATE};
pub use text::TextView;
