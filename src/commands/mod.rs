//! Command implementations for lesson-planner.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod generate;
mod validate;

use crate::cli::Command;
use crate::context::ProjectContext;
use crate::error::Result;
use std::path::Path;

pub use generate::cmd_generate;
pub use validate::cmd_validate;

/// Dispatch a command to its implementation.
///
/// The project context is resolved from the current working directory, with
/// `config_path` overriding the default config file lookup.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    let ctx = ProjectContext::resolve(config_path)?;

    match command {
        Command::Generate(args) => cmd_generate(&ctx, args),
        Command::Validate(args) => cmd_validate(&ctx, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ValidateArgs;
    use crate::error::LessonPlannerError;
    use crate::test_support::{DirGuard, write_project};
    use serial_test::serial;
    use tempfile::TempDir;

    const TEMPLATE: &str = "{{lesson_content}}{{voice_and_tone}}{{repository_structure}}\
                            {{target_repo}}{{branch_name}}";

    #[test]
    #[serial]
    fn dispatch_resolves_project_from_cwd() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), "intro", TEMPLATE);
        let _guard = DirGuard::new(temp_dir.path());

        let command = Command::Validate(ValidateArgs {
            lesson: "intro".to_string(),
        });
        dispatch(command, None).unwrap();
    }

    #[test]
    #[serial]
    fn dispatch_reports_missing_lesson_relative_to_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let command = Command::Validate(ValidateArgs {
            lesson: "absent".to_string(),
        });
        let err = dispatch(command, None).unwrap_err();
        assert_eq!(err.to_string(), "Lesson not found: lessons/absent.md");
    }

    #[test]
    #[serial]
    fn dispatch_honours_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        std::fs::write(&config_path, "lessons_dir: \"\"\n").unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let command = Command::Validate(ValidateArgs {
            lesson: "intro".to_string(),
        });
        let err = dispatch(command, Some(config_path.as_path())).unwrap_err();
        assert!(matches!(err, LessonPlannerError::Config(_)));
    }
}
