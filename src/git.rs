//! Git push support for lesson-planner.
//!
//! The only git operation this tool performs is pushing the lesson branch
//! after the agent has produced it. Output is captured in full and echoed
//! verbatim once git exits.

use crate::error::{LessonPlannerError, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, info};

/// Captured output of a git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, as captured.
    pub stdout: String,
    /// Standard error from the command, as captured.
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Print each non-empty stream: stdout to stdout, stderr to stderr.
    pub fn echo(&self) {
        if !self.stdout.is_empty() {
            print!("{}", self.stdout);
        }
        if !self.stderr.is_empty() {
            eprint!("{}", self.stderr);
        }
    }
}

/// Arguments for pushing `branch` to the same-named branch on `remote`.
pub fn push_args(remote: &str, branch: &str) -> Vec<String> {
    vec![
        "push".to_string(),
        remote.to_string(),
        format!("{}:{}", branch, branch),
    ]
}

/// Push `branch` from the repository at `repo_path` to `remote`.
///
/// Runs `git push <remote> <branch>:<branch>`. The branch must already exist
/// locally; nothing is retried or resolved here.
///
/// # Returns
///
/// * `Ok(GitOutput)` - Push succeeded; output has already been echoed
/// * `Err(LessonPlannerError::GitPushFailed)` - git exited non-zero, carrying its status
/// * `Err(LessonPlannerError::SpawnFailed)` - git could not be started
pub fn push_branch<P: AsRef<Path>>(repo_path: P, remote: &str, branch: &str) -> Result<GitOutput> {
    let repo_path = repo_path.as_ref();
    let args = push_args(remote, branch);

    info!(repo = %repo_path.display(), remote, branch, "pushing branch");
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(&args)
        .output()
        .map_err(|source| LessonPlannerError::SpawnFailed {
            program: "git".to_string(),
            source,
        })?;

    let git_output = GitOutput::from_output(&output);
    git_output.echo();

    if output.status.success() {
        debug!("push succeeded");
        Ok(git_output)
    } else {
        Err(LessonPlannerError::GitPushFailed {
            status: output.status.code(),
        })
    }
}
