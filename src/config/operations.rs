//! Config loading and validation.

use super::model::Config;
use crate::error::{LessonPlannerError, Result};
use std::path::{Component, Path};
use tracing::debug;

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lesson-planner.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LessonPlannerError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LessonPlannerError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the effective config for a project.
    ///
    /// An explicit path must exist. Without one, `lesson-planner.yaml` in the
    /// project root is used when present and defaults apply otherwise.
    pub fn resolve<P: AsRef<Path>>(project_root: P, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = project_root.as_ref().join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LessonPlannerError::Config(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - names, directories, remote, agent program and provider must be non-empty
    /// - `prompt_marker_file` must be a bare file name
    /// - `agent.timeout_seconds` must be positive when set
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("lessons_dir", &self.lessons_dir),
            ("docs_dir", &self.docs_dir),
            ("templates_dir", &self.templates_dir),
            ("template_name", &self.template_name),
            ("voice_and_tone_doc", &self.voice_and_tone_doc),
            ("repository_structure_doc", &self.repository_structure_doc),
            ("prompt_marker_file", &self.prompt_marker_file),
            ("remote", &self.remote),
            ("agent.program", &self.agent.program),
            ("agent.provider", &self.agent.provider),
            ("agent.default_model", &self.agent.default_model),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LessonPlannerError::Config(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        let mut components = Path::new(&self.prompt_marker_file).components();
        let is_bare_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_bare_name {
            return Err(LessonPlannerError::Config(format!(
                "config validation failed: prompt_marker_file must be a file name, not a path (found '{}')",
                self.prompt_marker_file
            )));
        }

        if self.inspection_prompt_path.as_os_str().is_empty() {
            return Err(LessonPlannerError::Config(
                "config validation failed: inspection_prompt_path must not be empty".to_string(),
            ));
        }

        if self.agent.timeout_seconds == Some(0) {
            return Err(LessonPlannerError::Config(
                "config validation failed: agent.timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
