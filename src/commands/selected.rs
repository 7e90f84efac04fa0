//! Selected command handler
//!
//! Prints the persisted selection without contacting the project source.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use visible_projects::config::Config;
use visible_projects::domain::ports::SelectionStore;
use visible_projects::presentation::factory;

pub fn cmd_selected(state: Option<&Path>, config: &Config, json: bool) -> Result<ExitCode> {
    let store = factory::create_selection_store(state, config);
    let ids = store.load()?;

    if json {
        println!("{}", serde_json::to_string(&ids)?);
    } else {
        for id in &ids {
            println!("{id}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
