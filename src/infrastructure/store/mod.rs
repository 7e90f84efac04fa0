//! Selection store implementations

mod json_selection;

pub use json_selection::{JsonSelectionStore, DEFAULT_STATE_FILE};
