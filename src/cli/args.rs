//! CLI argument definitions using clap
//!
//! Commands:
//! - nodeadmin serve --config <path>
//! - nodeadmin render --nodes <path> [--page N] [--per-page N] [--show-title] [--form-action URL]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Administrative node listing service
#[derive(Parser, Debug)]
#[command(name = "nodeadmin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the admin HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./nodeadmin.json")]
        config: PathBuf,
    },

    /// Render one page of a node fixture to stdout
    Render {
        /// JSON array of nodes
        #[arg(long)]
        nodes: PathBuf,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Nodes per page
        #[arg(long, default_value_t = 100)]
        per_page: usize,

        /// Include the Title column
        #[arg(long)]
        show_title: bool,

        /// Include the spam selection form posting here
        #[arg(long)]
        form_action: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
