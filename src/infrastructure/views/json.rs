//! JSON view
//!
//! Emits view updates as NDJSON events for scripting and CI consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ProjectItem, ProjectsView};

/// View that writes one JSON event per line
pub struct JsonView {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonView {
    /// Create a new JSON view writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON view writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn items_json(items: &[ProjectItem]) -> serde_json::Value {
    items
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id.as_str(),
                "name": item.name,
                "level": item.level,
                "has_children": item.has_children,
            })
        })
        .collect()
}

impl ProjectsView for JsonView {
    fn set_loading(&self, loading: bool) {
        self.write_event(serde_json::json!({
            "event": "loading",
            "loading": loading,
        }));
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        self.write_event(serde_json::json!({
            "event": "projects",
            "available": items_json(available),
            "selected": items_json(selected),
        }));
    }

    fn show_error(&self, message: &str) {
        self.write_event(serde_json::json!({
            "event": "error",
            "message": message,
        }));
    }
}
