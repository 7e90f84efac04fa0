//! Picker command handlers (show, select, unselect, shift)

use std::process::ExitCode;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use visible_projects::config::Config;
use visible_projects::domain::ports::SelectionStore;
use visible_projects::presentation::factory;
use visible_projects::presentation::{Commands, FinalFrameView};

pub fn cmd_picker(command: &Commands, config: &Config, json: bool) -> Result<ExitCode> {
    let Some(args) = command.picker_args() else {
        bail!("this command does not read a project source");
    };
    let Some(location) = args.source.clone().or_else(|| config.source.url.clone()) else {
        bail!("no project source: pass --source or set [source] url in the configuration");
    };

    let unicode = std::io::stdout().is_terminal();
    let view = FinalFrameView::new(factory::create_view(json, config, unicode)?);
    let store = factory::create_selection_store(args.state.as_deref(), config);

    let mut controller =
        factory::create_visible_projects(&location, &view, config, args.hide_selected)?
            .with_selected(store.load()?);
    controller.apply_filter(&args.filter, false)?;

    if controller.load_projects(&location).is_err() {
        return Ok(ExitCode::FAILURE);
    }

    let changed = match command {
        Commands::Select { id, .. } => report(controller.select_project(id), id, "select"),
        Commands::Unselect { id, .. } => report(controller.unselect_project(id), id, "unselect"),
        Commands::Shift { id, reverse, .. } => {
            report(controller.shift_project(id, *reverse), id, "shift")
        }
        Commands::Show { .. } | Commands::Selected { .. } => false,
    };

    // Saved even when unchanged: restore may have dropped stale ids.
    if command.is_mutating() {
        store.save(&controller.selected_projects())?;
        tracing::info!(
            file = %store.path().display(),
            changed,
            selected = controller.selection().len(),
            "selection saved"
        );
    }

    view.flush();
    Ok(ExitCode::SUCCESS)
}

fn report(changed: bool, id: &str, action: &str) -> bool {
    if !changed {
        tracing::warn!(project = id, "nothing to {action}");
    }
    changed
}
