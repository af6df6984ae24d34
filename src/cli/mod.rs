//! CLI module for the happyvisit command-line interface.
//!
//! With no subcommand the binary opens the TUI; the subcommands cover
//! scripted use (listing the catalog, sending a message, checking a build).

mod commands;
mod common;
mod completions;

// Re-export common utilities for use by CLI commands
pub use common::*;

pub use commands::{Cli, Commands};
