//! Project context resolution for lesson-planner.
//!
//! A project is the directory the command runs in: it holds `lessons/`,
//! `docs/`, `templates/` and optionally `lesson-planner.yaml`. This module
//! combines that root with the loaded [`Config`] so every command resolves
//! input and output paths the same way.

use crate::config::Config;
use crate::error::{LessonPlannerError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one lesson-planner run.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Directory that relative config paths are resolved against.
    pub root: PathBuf,

    /// Effective configuration.
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the project context from the current working directory.
    ///
    /// `config_path` overrides the default `lesson-planner.yaml` lookup.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            LessonPlannerError::Config(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(cwd, config_path)
    }

    /// Resolve the project context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(root: P, config_path: Option<&Path>) -> Result<Self> {
        let root = root.as_ref();
        let config = Config::resolve(root, config_path)?;
        Ok(Self::with_config(root, config))
    }

    /// Build a context from an already-loaded config.
    pub fn with_config<P: AsRef<Path>>(root: P, config: Config) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Path of a lesson relative to the project root (`lessons/<name>.md`).
    pub fn lesson_relative_path(&self, name: &str) -> PathBuf {
        Path::new(&self.config.lessons_dir).join(format!("{}.md", name))
    }

    /// Path of a supporting document relative to the project root (`docs/<name>.md`).
    pub fn document_relative_path(&self, name: &str) -> PathBuf {
        Path::new(&self.config.docs_dir).join(format!("{}.md", name))
    }

    /// Path of the prompt template relative to the project root.
    pub fn template_relative_path(&self) -> PathBuf {
        Path::new(&self.config.templates_dir).join(&self.config.template_name)
    }

    /// Resolve a project-relative path against the root.
    pub fn resolve_path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    /// Location of the inspection copy of the assembled prompt.
    pub fn inspection_prompt_path(&self) -> PathBuf {
        self.resolve_path(&self.config.inspection_prompt_path)
    }

    /// Resolve a user-supplied target repository path against the root.
    pub fn target_repo_path<P: AsRef<Path>>(&self, target: P) -> PathBuf {
        self.resolve_path(target)
    }
}
