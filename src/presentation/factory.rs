//! Controller Factory
//!
//! Creates the picker controller and its collaborators from configuration.
//! This is the dependency injection point for the binary.

use std::path::{Path, PathBuf};

use crate::application::{ControllerOptions, VisibleProjects};
use crate::config::Config;
use crate::domain::ports::{ProjectSource, ProjectsView};
use crate::error::ProjectsResult;
use crate::infrastructure::{source_for, JsonSelectionStore, JsonView, ProjectTemplate, TextView};

/// Controller over boxed ports, as wired by the CLI
pub type ConcreteVisibleProjects<V> = VisibleProjects<Box<dyn ProjectSource>, V>;

/// Create the view for the requested output format.
///
/// `unicode` is the terminal capability; the configured `render.unicode`
/// can only turn it off.
pub fn create_view(json: bool, config: &Config, unicode: bool) -> ProjectsResult<Box<dyn ProjectsView>> {
    if json {
        return Ok(Box::new(JsonView::stdout()));
    }

    let template =
        ProjectTemplate::parse(&config.render.template)?.with_html_escape(config.render.escape_html);
    Ok(Box::new(
        TextView::stdio()
            .with_template(template)
            .with_unicode(unicode && config.render.unicode),
    ))
}

/// Create a controller reading from `location` and rendering into `view`
pub fn create_visible_projects<V: ProjectsView>(
    location: &str,
    view: V,
    config: &Config,
    hide_selected: bool,
) -> ProjectsResult<ConcreteVisibleProjects<V>> {
    let source = source_for(location, config.timeout())?;
    let mut options = ControllerOptions::from(config);
    options.hide_selected |= hide_selected;
    Ok(VisibleProjects::with_options(source, view, options))
}

/// Selection store at `state`, or at the configured state file
pub fn create_selection_store(state: Option<&Path>, config: &Config) -> JsonSelectionStore {
    let path: PathBuf = state.map_or_else(|| config.state_file(), Path::to_path_buf);
    JsonSelectionStore::new(path)
}
