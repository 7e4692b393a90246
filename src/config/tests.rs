//! Tests for config functionality.

use crate::config::types::DEFAULT_MODEL;
use crate::config::Config;
use crate::config::operations::DEFAULT_CONFIG_FILE;
use crate::error::LessonPlannerError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.lessons_dir, "lessons");
    assert_eq!(config.docs_dir, "docs");
    assert_eq!(config.templates_dir, "templates");
    assert_eq!(config.template_name, "lesson-generation-prompt.md");
    assert_eq!(config.voice_and_tone_doc, "voice-and-tone");
    assert_eq!(config.repository_structure_doc, "repository-structure");
    assert_eq!(config.prompt_marker_file, ".lesson-planner-prompt.md");
    assert_eq!(
        config.inspection_prompt_path,
        std::env::temp_dir().join("lesson-planner-prompt.md")
    );
    assert_eq!(config.remote, "origin");
    assert_eq!(config.agent.program, "goose");
    assert_eq!(config.agent.provider, "anthropic");
    assert_eq!(config.agent.default_model, DEFAULT_MODEL);
    assert_eq!(config.agent.timeout_seconds, None);
    assert!(config.agent.environment.is_empty());
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
lessons_dir: specs
agent:
  timeout_seconds: 900
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.lessons_dir, "specs");
    assert_eq!(config.agent.timeout_seconds, Some(900));

    // Unspecified values should use defaults
    assert_eq!(config.docs_dir, "docs");
    assert_eq!(config.agent.program, "goose");
    assert_eq!(config.agent.provider, "anthropic");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
lessons_dir: content/lessons
docs_dir: content/docs
templates_dir: content/templates
template_name: prompt.md
voice_and_tone_doc: tone
repository_structure_doc: layout
prompt_marker_file: .prompt.md
inspection_prompt_path: /var/tmp/prompt.md
remote: upstream
agent:
  program: /opt/goose/bin/goose
  provider: openai
  default_model: gpt-x
  timeout_seconds: 60
  environment:
    GOOSE_MODE: auto
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.lessons_dir, "content/lessons");
    assert_eq!(config.docs_dir, "content/docs");
    assert_eq!(config.templates_dir, "content/templates");
    assert_eq!(config.template_name, "prompt.md");
    assert_eq!(config.voice_and_tone_doc, "tone");
    assert_eq!(config.repository_structure_doc, "layout");
    assert_eq!(config.prompt_marker_file, ".prompt.md");
    assert_eq!(
        config.inspection_prompt_path,
        PathBuf::from("/var/tmp/prompt.md")
    );
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.agent.program, "/opt/goose/bin/goose");
    assert_eq!(config.agent.provider, "openai");
    assert_eq!(config.agent.default_model, "gpt-x");
    assert_eq!(config.agent.timeout_seconds, Some(60));
    assert_eq!(
        config.agent.environment.get("GOOSE_MODE").map(String::as_str),
        Some("auto")
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
remote: origin
future_option: true
agent:
  retries: 3
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.remote, "origin");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml("lessons_dir: [unterminated");
    let err = result.unwrap_err();
    assert!(matches!(err, LessonPlannerError::Config(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_empty_fields() {
    let err = Config::from_yaml("lessons_dir: \"\"").unwrap_err();
    assert!(err.to_string().contains("lessons_dir must not be empty"));

    let err = Config::from_yaml("agent:\n  program: \"  \"").unwrap_err();
    assert!(err.to_string().contains("agent.program must not be empty"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let err = Config::from_yaml("agent:\n  timeout_seconds: 0").unwrap_err();
    assert!(err.to_string().contains("timeout_seconds must be greater than 0"));
}

#[test]
fn test_validate_rejects_marker_file_path() {
    let err = Config::from_yaml("prompt_marker_file: nested/prompt.md").unwrap_err();
    assert!(err.to_string().contains("must be a file name"));

    let err = Config::from_yaml("prompt_marker_file: ..").unwrap_err();
    assert!(err.to_string().contains("must be a file name"));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::resolve(temp_dir.path(), None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_reads_default_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(DEFAULT_CONFIG_FILE),
        "remote: upstream\n",
    )
    .unwrap();

    let config = Config::resolve(temp_dir.path(), None).unwrap();
    assert_eq!(config.remote, "upstream");
}

#[test]
fn test_resolve_explicit_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.yaml");

    let err = Config::resolve(temp_dir.path(), Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, LessonPlannerError::Config(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
