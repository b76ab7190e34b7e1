//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, OutputArgs};
pub use output::{format_entry, format_entry_list, format_timeline};
