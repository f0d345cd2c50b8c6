//! CLI interface for bitfn
//!
//! Provides the `bitfn` command-line tool over the text helpers.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction};
pub use paths::{config_dir, PersistentConfig};
