//! visible-projects CLI - filter a project hierarchy and keep an ordered selection
//!
//! Usage: visible-projects <COMMAND>
//!
//! Commands:
//!   show      List available and selected projects
//!   select    Select a project and its visible descendants
//!   unselect  Unselect a project
//!   shift     Reorder a selected project among its siblings
//!   selected  Print the persisted selected ids

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use visible_projects::presentation::{Cli, Commands};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Selected { state } => {
            commands::selected::cmd_selected(state.as_deref(), &config, cli.json)
        }
        command => commands::picker::cmd_picker(command, &config, cli.json),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("visible_projects={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
