//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for lesson generation.
///
/// Relative paths are resolved against the project root (the directory the
/// command runs in), not against the config file's location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Input layout
    // =========================================================================
    /// Directory holding `<lesson>.md` specifications.
    #[serde(default = "default_lessons_dir")]
    pub lessons_dir: String,

    /// Directory holding supporting documentation.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Directory holding the prompt template.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// File name of the prompt template inside `templates_dir`.
    #[serde(default = "default_template_name")]
    pub template_name: String,

    /// Document name (without `.md`) for the voice and tone guide.
    #[serde(default = "default_voice_and_tone_doc")]
    pub voice_and_tone_doc: String,

    /// Document name (without `.md`) for the repository structure guide.
    #[serde(default = "default_repository_structure_doc")]
    pub repository_structure_doc: String,

    // =========================================================================
    // Prompt outputs
    // =========================================================================
    /// File name of the prompt copy written inside the target repository.
    #[serde(default = "default_prompt_marker_file")]
    pub prompt_marker_file: String,

    /// Fixed location of the prompt copy kept for inspection.
    #[serde(default = "default_inspection_prompt_path")]
    pub inspection_prompt_path: PathBuf,

    // =========================================================================
    // Git settings
    // =========================================================================
    /// Remote that `--push-to-origin` pushes to.
    #[serde(default = "default_remote")]
    pub remote: String,

    // =========================================================================
    // Agent settings
    // =========================================================================
    #[serde(default)]
    pub agent: AgentSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lessons_dir: default_lessons_dir(),
            docs_dir: default_docs_dir(),
            templates_dir: default_templates_dir(),
            template_name: default_template_name(),
            voice_and_tone_doc: default_voice_and_tone_doc(),
            repository_structure_doc: default_repository_structure_doc(),
            prompt_marker_file: default_prompt_marker_file(),
            inspection_prompt_path: default_inspection_prompt_path(),
            remote: default_remote(),
            agent: AgentSettings::default(),
        }
    }
}
