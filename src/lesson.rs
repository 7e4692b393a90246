//! Lesson specification loading.
//!
//! A lesson is a markdown file under `lessons/` that must contain seven
//! section headers. Headers are matched as exact, case-sensitive substrings
//! anywhere in the file; their order does not matter. The content is returned
//! untouched since it is only ever substituted into the prompt template.

use crate::context::ProjectContext;
use crate::error::{LessonPlannerError, Result};
use tracing::debug;

/// Section headers every lesson must contain, in reporting order.
pub const REQUIRED_SECTIONS: [&str; 7] = [
    "# Metadata",
    "# Inspiration",
    "# Initial State",
    "# Optimizations",
    "# Commits",
    "# Validation",
    "# Lesson Structure",
];

/// Load and validate the lesson named `name` (no `.md` suffix).
///
/// # Returns
///
/// * `Ok(String)` - The lesson text, unmodified
/// * `Err(LessonPlannerError::LessonNotFound)` - No file at `lessons/<name>.md`
/// * `Err(LessonPlannerError::InvalidLesson)` - Unreadable, not UTF-8, or a section is missing
pub fn load_lesson(ctx: &ProjectContext, name: &str) -> Result<String> {
    let content = read_lesson(ctx, name)?;
    validate_lesson(&content)?;
    Ok(content)
}

/// Read the lesson named `name` without checking its sections.
pub fn read_lesson(ctx: &ProjectContext, name: &str) -> Result<String> {
    let relative = ctx.lesson_relative_path(name);
    let path = ctx.resolve_path(&relative);

    if !path.is_file() {
        return Err(LessonPlannerError::LessonNotFound {
            name: name.to_string(),
            path: relative,
        });
    }

    std::fs::read_to_string(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "failed to read lesson");
        LessonPlannerError::InvalidLesson("Could not read lesson file".to_string())
    })
}

/// Check that `content` contains every required section.
///
/// Fails on the first missing header in [`REQUIRED_SECTIONS`] order.
pub fn validate_lesson(content: &str) -> Result<()> {
    match missing_sections(content).first() {
        Some(section) => Err(LessonPlannerError::InvalidLesson(format!(
            "Missing required section: {}",
            section
        ))),
        None => Ok(()),
    }
}

/// All required sections absent from `content`.
pub fn missing_sections(content: &str) -> Vec<&'static str> {
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| !content.contains(section))
        .collect()
}
