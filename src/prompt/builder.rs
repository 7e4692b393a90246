//! Template loading and prompt rendering.

use super::template::{PromptInputs, render_prompt, unknown_markers};
use crate::context::ProjectContext;
use crate::error::{LessonPlannerError, Result};
use tracing::{debug, warn};

/// Read the prompt template (`templates/lesson-generation-prompt.md`).
///
/// Any read failure is reported as `DocumentNotFound` with the
/// project-relative path.
pub fn load_template(ctx: &ProjectContext) -> Result<String> {
    let relative = ctx.template_relative_path();
    let path = ctx.resolve_path(&relative);

    std::fs::read_to_string(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "failed to read template");
        LessonPlannerError::DocumentNotFound { path: relative }
    })
}

/// Load the template and substitute all markers.
///
/// Marker-shaped tokens the template contains but that are not recognised
/// are left in place and reported as warnings.
pub fn build_prompt(ctx: &ProjectContext, inputs: &PromptInputs<'_>) -> Result<String> {
    let template = load_template(ctx)?;

    for token in unknown_markers(&template) {
        warn!(%token, "template contains an unrecognised marker");
        eprintln!("Warning: template contains unrecognised marker {}", token);
    }

    let prompt = render_prompt(&template, inputs);
    debug!(
        template_bytes = template.len(),
        prompt_bytes = prompt.len(),
        "prompt rendered"
    );
    Ok(prompt)
}
