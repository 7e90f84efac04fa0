//! Text view
//!
//! Human-readable listing: one indented line per project, rendered through a
//! [`ProjectTemplate`].

use std::io::{self, Write};
use std::sync::Mutex;

use super::template::ProjectTemplate;
use crate::domain::entities::DISPLAY_SEPARATOR;
use crate::domain::ports::{ProjectItem, ProjectsView};

const ASCII_SEPARATOR: &str = " -> ";

pub struct TextView {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    template: ProjectTemplate,
    supports_unicode: bool,
}

impl TextView {
    /// Listing on stdout, errors on stderr
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            template: ProjectTemplate::default(),
            supports_unicode: true,
        }
    }

    pub fn with_template(mut self, template: ProjectTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_unicode(mut self, supports_unicode: bool) -> Self {
        self.supports_unicode = supports_unicode;
        self
    }

    fn render_line(&self, item: &ProjectItem) -> String {
        let separator = if self.supports_unicode {
            DISPLAY_SEPARATOR
        } else {
            ASCII_SEPARATOR
        };
        let indent = "  ".repeat(item.level);
        format!("{indent}{}", self.template.render_with_separator(item, separator))
    }

    /// Render both lists to a string
    pub fn render(&self, available: &[ProjectItem], selected: &[ProjectItem]) -> String {
        let mut out = String::from("Available projects:\n");
        for item in available {
            out.push_str(&self.render_line(item));
            out.push('\n');
        }
        out.push_str("Selected projects:\n");
        for item in selected {
            out.push_str(&self.render_line(item));
            out.push('\n');
        }
        out
    }
}

impl ProjectsView for TextView {
    fn set_loading(&self, loading: bool) {
        tracing::debug!(loading, "loading indicator");
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        let rendered = self.render(available, selected);
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(rendered.as_bytes());
            let _ = out.flush();
        }
    }

    fn show_error(&self, message: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "error: {message}");
            let _ = err.flush();
        }
    }
}
