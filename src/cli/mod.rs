//! CLI argument parsing for lesson-planner.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate lesson repositories from lesson specifications.
///
/// A lesson lives in `lessons/<name>.md`. Together with `docs/` and the
/// prompt template in `templates/`, it is turned into a prompt for the
/// goose agent, which builds the lesson repository on a fresh branch.
#[derive(Parser, Debug)]
#[command(name = "lesson-planner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: lesson-planner.yaml in the current directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for lesson-planner.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a lesson repository.
    ///
    /// Loads the lesson and documentation, builds the prompt, runs the agent
    /// in the target repository, and optionally pushes the branch.
    Generate(GenerateArgs),

    /// Check a lesson and the prompt template without running the agent.
    ///
    /// Reports every missing lesson section and template marker.
    Validate(ValidateArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Name of lesson file in lessons/ (without .md extension).
    #[arg(long)]
    pub lesson: String,

    /// Path to target repository (will be created if it doesn't exist).
    #[arg(long)]
    pub target_repo: PathBuf,

    /// Branch name (default: lesson-YYYYMMDD-HHMMSS).
    #[arg(long)]
    pub branch: Option<String>,

    /// Goose model to use (default: agent.default_model from config, goose-claude-4-5-sonnet).
    #[arg(long)]
    pub model: Option<String>,

    /// Push branch to origin after generation.
    #[arg(long)]
    pub push_to_origin: bool,

    /// Run prompt validation cycle with subagents (accepted, currently no effect).
    #[arg(long)]
    pub validate_prompts: bool,

    /// Kill the agent if it runs longer than this many seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: Option<u64>,

    /// Write the prompt files and show the agent command without running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Name of lesson file in lessons/ (without .md extension).
    #[arg(long)]
    pub lesson: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
