//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the controller with infrastructure dependencies
//! - Output buffering for one-shot runs
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the controller, view and selection store
//! - `output` - Final-frame rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, PickerArgs};
pub use output::FinalFrameView;
