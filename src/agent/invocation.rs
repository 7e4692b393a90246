//! Agent command construction.

use crate::config::AgentSettings;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One fully specified agent run.
///
/// The argument vector is `run --text <prompt> --provider <provider> --model <model>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInvocation {
    /// Executable, resolved through `PATH` when it is a bare name.
    pub program: String,
    /// Arguments after the program name.
    pub args: Vec<String>,
    /// Directory the agent runs in.
    pub working_dir: PathBuf,
    /// Extra environment variables layered over the inherited environment.
    pub environment: BTreeMap<String, String>,
}

impl AgentInvocation {
    /// Build the invocation for `prompt` and `model` inside `working_dir`.
    pub fn new(settings: &AgentSettings, prompt: &str, model: &str, working_dir: &Path) -> Self {
        Self {
            program: settings.program.clone(),
            args: vec![
                "run".to_string(),
                "--text".to_string(),
                prompt.to_string(),
                "--provider".to_string(),
                settings.provider.clone(),
                "--model".to_string(),
                model.to_string(),
            ],
            working_dir: working_dir.to_path_buf(),
            environment: settings.environment.clone(),
        }
    }

    /// A `std::process::Command` ready to spawn. Stdio is left to the caller.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.working_dir)
            .envs(&self.environment);
        command
    }

    /// Shell-quoted command line with the prompt text replaced by `prompt_ref`.
    ///
    /// Prompts run to many kilobytes, so dry runs show a reference instead.
    pub fn display_command_line(&self, prompt_ref: &str) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        let mut previous: Option<&str> = None;
        for arg in &self.args {
            if previous == Some("--text") {
                words.push(prompt_ref);
            } else {
                words.push(arg.as_str());
            }
            previous = Some(arg.as_str());
        }
        shell_words::join(words)
    }
}
