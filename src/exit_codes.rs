//! Exit code constants for the lesson-planner CLI.
//!
//! - 0: Success
//! - 1: User error (missing inputs, bad config, unwritable output)
//! - 2: Lesson validation failure (missing sections or markers)
//! - 3: Agent failure (spawn, non-zero exit, timeout)
//! - 4: Git push failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing lesson/document/template, invalid config, or write failure.
pub const USER_ERROR: i32 = 1;

/// Lesson validation failure: a required section or template marker is missing.
pub const VALIDATION_FAILURE: i32 = 2;

/// Agent failure: the agent could not be spawned, exited non-zero, or timed out.
pub const AGENT_FAILURE: i32 = 3;

/// Git failure: `git push` could not be spawned or exited non-zero.
pub const GIT_FAILURE: i32 = 4;
