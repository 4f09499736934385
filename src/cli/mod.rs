//! CLI module for nodeadmin
//!
//! Provides command-line interface for:
//! - serve: load config and fixture, run the HTTP server
//! - render: print one page of a node fixture as HTML

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{render, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
