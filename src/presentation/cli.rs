//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose) are inherited by all subcommands
//! - Every picker subcommand takes the same source/filter/state flags
//! - `selected` only reads the state file, so it takes `--state` alone

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Visible projects - filter a project hierarchy and keep an ordered selection
#[derive(Parser, Debug)]
#[command(name = "visible-projects")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./.visible-projects.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every picker subcommand
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerArgs {
    /// Projects URL (http/https) or local JSON file
    #[arg(short, long)]
    pub source: Option<String>,

    /// Filter text; whitespace-separated terms matched in order
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Selection state file
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Leave selected projects out of the available list
    #[arg(long)]
    pub hide_selected: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available and selected projects
    Show {
        #[command(flatten)]
        args: PickerArgs,
    },

    /// Select a project and its visible descendants
    Select {
        /// Project id
        id: String,

        #[command(flatten)]
        args: PickerArgs,
    },

    /// Unselect a project and everything selected below it
    Unselect {
        /// Project id
        id: String,

        #[command(flatten)]
        args: PickerArgs,
    },

    /// Move a selected project before its previous sibling
    Shift {
        /// Project id
        id: String,

        /// Move after the next sibling instead
        #[arg(long)]
        reverse: bool,

        #[command(flatten)]
        args: PickerArgs,
    },

    /// Print the persisted selected ids
    Selected {
        /// Selection state file
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

impl Commands {
    /// Source, filter and state flags; `None` for `selected`
    pub fn picker_args(&self) -> Option<&PickerArgs> {
        match self {
            Commands::Show { args }
            | Commands::Select { args, .. }
            | Commands::Unselect { args, .. }
            | Commands::Shift { args, .. } => Some(args),
            Commands::Selected { .. } => None,
        }
    }

    /// Whether the command changes the persisted selection
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Commands::Select { .. } | Commands::Unselect { .. } | Commands::Shift { .. }
        )
    }
}
