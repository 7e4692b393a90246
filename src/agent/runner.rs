//! Agent subprocess runner.
//!
//! Runs the agent in the target repository with its output streamed live.
//! The calling thread blocks until the agent exits, not until its output
//! pipes close; without a timeout a hung agent blocks forever, matching how
//! operators run it interactively.

use super::invocation::AgentInvocation;
use super::stream::{join_forwarder, spawn_forwarder};
use crate::config::AgentSettings;
use crate::error::{LessonPlannerError, Result};
use crate::fs::{atomic_write_file, ensure_dir};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use wait_timeout::ChildExt;

/// How long output forwarding may continue after the agent exits.
pub const OUTPUT_DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Inputs for one agent run.
#[derive(Debug, Clone, Copy)]
pub struct AgentRequest<'a> {
    /// Fully assembled prompt.
    pub prompt: &'a str,
    /// Model identifier passed as `--model`.
    pub model: &'a str,
    /// Target repository; created when missing.
    pub working_dir: &'a Path,
    /// File name of the prompt copy written inside `working_dir`.
    pub prompt_file_name: &'a str,
    /// Kill the agent after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Create the working directory and write the prompt copy into it.
///
/// Returns the path of the written prompt file.
pub fn prepare_working_dir(
    working_dir: &Path,
    prompt_file_name: &str,
    prompt: &str,
) -> Result<PathBuf> {
    ensure_dir(working_dir)?;

    let prompt_path = working_dir.join(prompt_file_name);
    atomic_write_file(&prompt_path, prompt)?;
    debug!(path = %prompt_path.display(), "wrote prompt marker file");
    Ok(prompt_path)
}

/// Prepare the working directory, run the agent, and check its exit status.
///
/// # Returns
///
/// * `Ok(())` - The agent exited with status 0
/// * `Err(LessonPlannerError::AgentInvocationFailed)` - Non-zero exit, carrying the code
/// * `Err(LessonPlannerError::AgentTimedOut)` - The timeout elapsed and the agent was killed
/// * `Err(LessonPlannerError::SpawnFailed)` - The agent program could not be started
/// * `Err(LessonPlannerError::WriteFailed)` - The working directory or prompt file could not be written
pub fn invoke_agent(settings: &AgentSettings, request: &AgentRequest<'_>) -> Result<()> {
    prepare_working_dir(request.working_dir, request.prompt_file_name, request.prompt)?;

    let invocation =
        AgentInvocation::new(settings, request.prompt, request.model, request.working_dir);
    let status = run_streaming(&invocation, request.timeout)?;

    if status.success() {
        Ok(())
    } else {
        Err(LessonPlannerError::AgentInvocationFailed {
            status: status.code(),
        })
    }
}

/// Spawn the invocation with piped output, forward both pipes live, and wait.
pub fn run_streaming(
    invocation: &AgentInvocation,
    timeout: Option<Duration>,
) -> Result<ExitStatus> {
    run_streaming_to(invocation, timeout, io::stdout(), io::stderr())
}

/// Like [`run_streaming`], forwarding the agent's output to the given writers.
///
/// Returns once the agent exits. Output still arriving from processes the
/// agent left behind is forwarded for at most [`OUTPUT_DRAIN_GRACE`] longer.
pub fn run_streaming_to<O, E>(
    invocation: &AgentInvocation,
    timeout: Option<Duration>,
    stdout: O,
    stderr: E,
) -> Result<ExitStatus>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    let mut command = invocation.to_command();
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if timeout.is_some() {
        isolate_process_group(&mut command);
    }

    info!(
        program = %invocation.program,
        working_dir = %invocation.working_dir.display(),
        "spawning agent"
    );
    let start = Instant::now();
    let mut child = command
        .spawn()
        .map_err(|source| LessonPlannerError::SpawnFailed {
            program: invocation.program.clone(),
            source,
        })?;

    let stdout_handle = child.stdout.take().map(|pipe| spawn_forwarder(pipe, stdout));
    let stderr_handle = child.stderr.take().map(|pipe| spawn_forwarder(pipe, stderr));

    let waited = wait_for_exit(&mut child, timeout);

    let drain_deadline = Instant::now() + OUTPUT_DRAIN_GRACE;
    if let Some(handle) = stdout_handle {
        join_forwarder("stdout", handle, drain_deadline);
    }
    if let Some(handle) = stderr_handle {
        join_forwarder("stderr", handle, drain_deadline);
    }

    let outcome = waited.map_err(|source| LessonPlannerError::AgentWaitFailed {
        program: invocation.program.clone(),
        source,
    })?;
    if let Ok(status) = &outcome {
        debug!(
            exit_code = ?status.code(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "agent finished"
        );
    }

    outcome
}

/// Block until the child exits, killing it if `timeout` elapses first.
///
/// The outer `io::Result` covers wait failures; the inner `Result` reports a timeout.
fn wait_for_exit(child: &mut Child, timeout: Option<Duration>) -> io::Result<Result<ExitStatus>> {
    let Some(limit) = timeout else {
        return child.wait().map(Ok);
    };

    match child.wait_timeout(limit)? {
        Some(status) => Ok(Ok(status)),
        None => {
            warn!(timeout_secs = limit.as_secs(), "agent timed out, killing");
            kill_agent(child)?;
            child.wait()?;
            Ok(Err(LessonPlannerError::AgentTimedOut {
                seconds: limit.as_secs(),
            }))
        }
    }
}

/// Start the agent as leader of a new process group.
///
/// Only timed runs are isolated, so expiry can kill everything the agent
/// started. Untimed runs stay in the terminal's foreground group where they
/// keep receiving Ctrl-C and can read the terminal.
#[cfg(unix)]
fn isolate_process_group(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn isolate_process_group(_command: &mut Command) {}

/// Kill the agent's whole process group, falling back to the agent alone.
#[cfg(unix)]
fn kill_agent(child: &mut Child) -> io::Result<()> {
    // process_group(0) made the agent's pid its group id.
    let Ok(pgid) = libc::pid_t::try_from(child.id()) else {
        return child.kill();
    };
    if unsafe { libc::kill(-pgid, libc::SIGKILL) } == 0 {
        return Ok(());
    }
    warn!(
        pgid,
        error = %io::Error::last_os_error(),
        "could not signal agent process group"
    );
    child.kill()
}

#[cfg(not(unix))]
fn kill_agent(child: &mut Child) -> io::Result<()> {
    child.kill()
}
