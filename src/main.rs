//! lesson-planner: generate lesson repositories from lesson specifications.
//!
//! This is the main entry point for the `lesson-planner` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod agent;
mod cli;
mod commands;
mod config;
mod context;
mod docs;
mod error;
mod exit_codes;
mod fs;
mod git;
mod lesson;
mod logging;
mod naming;
mod prompt;
#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command, cli.config.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
