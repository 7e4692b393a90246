//! Supporting documentation loading.

use crate::context::ProjectContext;
use crate::error::{LessonPlannerError, Result};
use tracing::debug;

/// Read `docs/<name>.md` verbatim.
///
/// Any read failure, including invalid UTF-8, is reported as
/// `DocumentNotFound` with the project-relative path.
pub fn load_document(ctx: &ProjectContext, name: &str) -> Result<String> {
    let relative = ctx.document_relative_path(name);
    let path = ctx.resolve_path(&relative);

    std::fs::read_to_string(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "failed to read document");
        LessonPlannerError::DocumentNotFound { path: relative }
    })
}
