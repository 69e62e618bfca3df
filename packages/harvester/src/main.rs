//! `chatgrab` binary.

use std::process::ExitCode;

use chatgrab_harvester::cli;
use console::style;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // WARN by default so stdout stays clean for piping, RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
