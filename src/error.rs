//! Error types for the lesson-planner CLI.
//!
//! Every pipeline step fails with one of these variants. Payloads are kept
//! structured (paths, exit statuses) so callers can branch on kind; the
//! human-readable rendering lives in the `#[error]` attributes.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lesson-planner operations.
#[derive(Error, Debug)]
pub enum LessonPlannerError {
    /// A documentation or template file could not be read.
    #[error("Document not found: {}", .path.display())]
    DocumentNotFound { path: PathBuf },

    /// The requested lesson file does not exist.
    #[error("Lesson not found: {}", .path.display())]
    LessonNotFound { name: String, path: PathBuf },

    /// The lesson (or template) is unreadable or missing required content.
    #[error("Invalid lesson format: {0}")]
    InvalidLesson(String),

    /// The agent process exited unsuccessfully.
    #[error("Agent invocation failed with status {}", describe_status(.status))]
    AgentInvocationFailed { status: Option<i32> },

    /// The agent process ran longer than the configured timeout and was killed.
    #[error("Agent invocation timed out after {seconds}s")]
    AgentTimedOut { seconds: u64 },

    /// Waiting on a started agent failed.
    #[error("failed while waiting for '{program}' to finish: {source}")]
    AgentWaitFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `git push` exited unsuccessfully.
    #[error("Git push failed with status {}", describe_status(.status))]
    GitPushFailed { status: Option<i32> },

    /// An external program could not be started.
    #[error("failed to execute '{program}': {source}\nFix: ensure '{program}' is installed and in PATH.")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A prompt copy or directory could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(String),
}

impl LessonPlannerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LessonPlannerError::DocumentNotFound { .. } => exit_codes::USER_ERROR,
            LessonPlannerError::LessonNotFound { .. } => exit_codes::USER_ERROR,
            LessonPlannerError::InvalidLesson(_) => exit_codes::VALIDATION_FAILURE,
            LessonPlannerError::AgentInvocationFailed { .. } => exit_codes::AGENT_FAILURE,
            LessonPlannerError::AgentTimedOut { .. } => exit_codes::AGENT_FAILURE,
            LessonPlannerError::AgentWaitFailed { .. } => exit_codes::AGENT_FAILURE,
            LessonPlannerError::GitPushFailed { .. } => exit_codes::GIT_FAILURE,
            LessonPlannerError::SpawnFailed { program, .. } if program == "git" => {
                exit_codes::GIT_FAILURE
            }
            LessonPlannerError::SpawnFailed { .. } => exit_codes::AGENT_FAILURE,
            LessonPlannerError::WriteFailed { .. } => exit_codes::USER_ERROR,
            LessonPlannerError::Config(_) => exit_codes::USER_ERROR,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

/// Result type alias for lesson-planner operations.
pub type Result<T> = std::result::Result<T, LessonPlannerError>;
