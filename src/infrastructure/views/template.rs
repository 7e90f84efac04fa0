//! Item templates
//!
//! A template is literal text with `${field}` placeholders. Supported fields
//! are `id`, `name` and `level`. Substituted values can be HTML-escaped for
//! hosts that embed the output in markup.

use crate::domain::entities::DISPLAY_SEPARATOR;
use crate::domain::ports::ProjectItem;
use crate::error::{ProjectsError, ProjectsResult};

pub const DEFAULT_TEMPLATE: &str = "${name}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Name,
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    segments: Vec<Segment>,
    escape_html: bool,
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self {
            segments: vec![Segment::Field(Field::Name)],
            escape_html: false,
        }
    }
}

impl ProjectTemplate {
    pub fn parse(template: &str) -> ProjectsResult<Self> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start + 2..].find('}') else {
                break;
            };
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let name = rest[start + 2..start + 2 + len].trim();
            let field = match name {
                "id" => Field::Id,
                "name" => Field::Name,
                "level" => Field::Level,
                other => {
                    return Err(ProjectsError::InvalidTemplate {
                        template: template.to_string(),
                        message: format!("unknown field '{other}' (expected id, name or level)"),
                    })
                }
            };
            segments.push(Segment::Field(field));
            rest = &rest[start + 2 + len + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            segments,
            escape_html: false,
        })
    }

    pub fn with_html_escape(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    pub fn render(&self, item: &ProjectItem) -> String {
        self.render_with_separator(item, DISPLAY_SEPARATOR)
    }

    /// Render with `separator` between the folded ancestor names of `name`.
    /// Template literals are left alone and the separator is never escaped.
    pub fn render_with_separator(&self, item: &ProjectItem, separator: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Id) => out.push_str(&self.encode(item.id.as_str())),
                Segment::Field(Field::Name) => {
                    let parts: Vec<String> = item
                        .name
                        .split(DISPLAY_SEPARATOR)
                        .map(|part| self.encode(part))
                        .collect();
                    out.push_str(&parts.join(separator));
                }
                Segment::Field(Field::Level) => out.push_str(&item.level.to_string()),
            }
        }
        out
    }

    fn encode(&self, value: &str) -> String {
        if self.escape_html {
            escape_html(value)
        } else {
            value.to_string()
        }
    }
}

/// Escape the characters that are significant in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProjectId;

    fn item(name: &str) -> ProjectItem {
        ProjectItem {
            id: ProjectId::from("Web_Api"),
            name: name.to_string(),
            level: 2,
            has_children: false,
        }
    }

    #[test]
    fn renders_placeholders() {
        let template = ProjectTemplate::parse(r#"<div data-id="${id}" data-level="${ level }">${name}</div>"#).unwrap();
        assert_eq!(
            template.render(&item("Api")),
            r#"<div data-id="Web_Api" data-level="2">Api</div>"#
        );
    }

    #[test]
    fn escapes_values_not_literals() {
        let template = ProjectTemplate::parse("<div>${name}</div>")
            .unwrap()
            .with_html_escape(true);
        assert_eq!(
            template.render(&item("<Root project> & co")),
            "<div>&lt;Root project&gt; &amp; co</div>"
        );
    }

    #[test]
    fn separator_replaces_folded_names_only() {
        let template = ProjectTemplate::parse("${name} → ${id}")
            .unwrap()
            .with_html_escape(true);
        assert_eq!(
            template.render_with_separator(&item("R&D → Api"), " -> "),
            "R&amp;D -> Api → Web_Api"
        );
        assert_eq!(template.render(&item("R&D → Api")), "R&amp;D → Api → Web_Api");
    }

    #[test]
    fn default_renders_bare_name() {
        assert_eq!(ProjectTemplate::default().render(&item("Api")), "Api");
        assert_eq!(
            ProjectTemplate::parse(DEFAULT_TEMPLATE).unwrap(),
            ProjectTemplate::default()
        );
    }

    #[test]
    fn unclosed_placeholder_stays_literal() {
        let template = ProjectTemplate::parse("${name} ${oops").unwrap();
        assert_eq!(template.render(&item("Api")), "Api ${oops");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = ProjectTemplate::parse("${href}").unwrap_err();
        assert!(matches!(err, ProjectsError::InvalidTemplate { .. }));
    }
}
