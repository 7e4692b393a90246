//! Marker substitution for the lesson-generation prompt template.
//!
//! Substitution is literal: no escaping and no expression syntax. The template
//! is scanned once from left to right and every known marker is replaced by
//! its value. Values are copied into the output and never rescanned, so a
//! lesson that itself mentions `{{branch_name}}` is inserted as written and
//! the result does not depend on the order markers are listed in.

use regex::Regex;
use std::sync::LazyLock;

/// Anything shaped like a marker, known or not.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*[A-Za-z0-9_]+\s*\}\}").expect("Invalid marker regex")
});

/// A placeholder recognised in the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    LessonContent,
    VoiceAndTone,
    RepositoryStructure,
    TargetRepo,
    BranchName,
}

impl Marker {
    /// Every marker, in the order they are documented.
    pub const ALL: [Marker; 5] = [
        Marker::LessonContent,
        Marker::VoiceAndTone,
        Marker::RepositoryStructure,
        Marker::TargetRepo,
        Marker::BranchName,
    ];

    /// The literal token as it appears in a template.
    pub fn token(self) -> &'static str {
        match self {
            Marker::LessonContent => "{{lesson_content}}",
            Marker::VoiceAndTone => "{{voice_and_tone}}",
            Marker::RepositoryStructure => "{{repository_structure}}",
            Marker::TargetRepo => "{{target_repo}}",
            Marker::BranchName => "{{branch_name}}",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Values substituted into the template.
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    pub lesson_content: &'a str,
    pub voice_and_tone: &'a str,
    pub repository_structure: &'a str,
    pub target_repo: &'a str,
    pub branch_name: &'a str,
}

impl<'a> PromptInputs<'a> {
    /// The value that replaces `marker`.
    pub fn value(&self, marker: Marker) -> &'a str {
        match marker {
            Marker::LessonContent => self.lesson_content,
            Marker::VoiceAndTone => self.voice_and_tone,
            Marker::RepositoryStructure => self.repository_structure,
            Marker::TargetRepo => self.target_repo,
            Marker::BranchName => self.branch_name,
        }
    }
}

/// Substitute every marker occurrence in `template`.
///
/// Text that is not a known marker, including unknown `{{name}}` tokens,
/// is copied through unchanged.
pub fn render_prompt(template: &str, inputs: &PromptInputs<'_>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match Marker::ALL
            .iter()
            .find(|marker| candidate.starts_with(marker.token()))
        {
            Some(&marker) => {
                result.push_str(inputs.value(marker));
                rest = &candidate[marker.token().len()..];
            }
            None => {
                // Advance one brace so `{{{marker}}` still matches at the next position.
                result.push('{');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Known markers that never appear in `template`.
pub fn missing_markers(template: &str) -> Vec<Marker> {
    Marker::ALL
        .iter()
        .copied()
        .filter(|marker| !template.contains(marker.token()))
        .collect()
}

/// Marker-shaped tokens in `template` that will not be substituted.
///
/// Catches typos such as `{{lesson}}` or `{{ branch_name }}`. Each distinct
/// token is reported once, in order of first appearance.
pub fn unknown_markers(template: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in MARKER_REGEX.find_iter(template) {
        let token = m.as_str();
        let known = Marker::ALL.iter().any(|marker| marker.token() == token);
        if !known && !found.iter().any(|t| t == token) {
            found.push(token.to_string());
        }
    }
    found
}
