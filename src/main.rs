//! nodeadmin CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, logs a FATAL event
//! on failure and exits non-zero.

use nodeadmin::cli;
use nodeadmin::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal(
            "CLI_FAILED",
            &[("code", e.code_str()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
