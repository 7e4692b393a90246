//! Agent invocation for lesson generation.
//!
//! - **Invocation**: builds the `goose run` command from settings and prompt
//! - **Runner**: prepares the target directory, spawns the agent, waits for exit
//! - **Stream**: forwards the agent's stdout/stderr live from reader threads
//!
//! The agent does the actual repository work; this module only owns its
//! invocation contract: arguments, working directory, and exit status.

mod invocation;
mod runner;
mod stream;

// Re-export public API
pub use invocation::AgentInvocation;
pub use runner::{AgentRequest, invoke_agent, prepare_working_dir};
