//! Configuration types and defaults for lesson-planner.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default model passed to the agent when `--model` is omitted.
pub const DEFAULT_MODEL: &str = "goose-claude-4-5-sonnet";

/// Settings for invoking the external coding agent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Executable name or path, resolved through `PATH` when bare.
    pub program: String,

    /// Provider identifier passed as `--provider`.
    pub provider: String,

    /// Model used when the CLI does not specify one.
    pub default_model: String,

    /// Kill the agent after this many seconds. Unset means wait forever.
    pub timeout_seconds: Option<u64>,

    /// Extra environment variables for the agent process.
    pub environment: BTreeMap<String, String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            program: default_agent_program(),
            provider: default_agent_provider(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_seconds: None,
            environment: BTreeMap::new(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_agent_program() -> String {
    "goose".to_string()
}
pub(crate) fn default_agent_provider() -> String {
    "anthropic".to_string()
}
pub(crate) fn default_lessons_dir() -> String {
    "lessons".to_string()
}
pub(crate) fn default_docs_dir() -> String {
    "docs".to_string()
}
pub(crate) fn default_templates_dir() -> String {
    "templates".to_string()
}
pub(crate) fn default_template_name() -> String {
    "lesson-generation-prompt.md".to_string()
}
pub(crate) fn default_voice_and_tone_doc() -> String {
    "voice-and-tone".to_string()
}
pub(crate) fn default_repository_structure_doc() -> String {
    "repository-structure".to_string()
}
pub(crate) fn default_prompt_marker_file() -> String {
    ".lesson-planner-prompt.md".to_string()
}
pub(crate) fn default_inspection_prompt_path() -> PathBuf {
    std::env::temp_dir().join("lesson-planner-prompt.md")
}
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
