//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::config::AdminConfig;
use crate::csrf::CsrfGuard;
use crate::http_server::{AdminState, HttpServer};
use crate::observability::Logger;
use crate::store::{MemoryNodeStore, NodeSource};
use crate::view::{NodeListOptions, NodeListView};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Render {
            nodes,
            page,
            per_page,
            show_title,
            form_action,
        } => {
            let mut options = NodeListOptions::new(show_title);
            if let Some(action) = form_action {
                options = options.with_form_action(action);
            }
            let html = render(&nodes, page, per_page, &options)?;

            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Load config and fixture, then serve until stopped
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = AdminConfig::load(config_path)?;

    let store = match &config.fixture {
        Some(path) => {
            let store = MemoryNodeStore::load_fixture(path)?;
            let count = store.len().to_string();
            let path_str = path.display().to_string();
            Logger::info(
                "FIXTURE_LOADED",
                &[("nodes", count.as_str()), ("path", path_str.as_str())],
            );
            store
        }
        None => MemoryNodeStore::new(),
    };

    let state = Arc::new(AdminState::from_config(&config, Arc::new(store)));
    let server = HttpServer::new(config, state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Render one page of a node fixture as an HTML fragment
pub fn render(
    nodes_path: &Path,
    page: usize,
    per_page: usize,
    options: &NodeListOptions,
) -> CliResult<String> {
    let store = MemoryNodeStore::load_fixture(nodes_path)?;
    let page = store.page(page, per_page)?;

    let token = options.form_action.as_ref().map(|_| CsrfGuard::random().issue());
    Ok(NodeListView::default().render(&page, options, token.as_deref()))
}
