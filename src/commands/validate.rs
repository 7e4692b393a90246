//! Implementation of the `lesson-planner validate` command.
//!
//! Checks everything `generate` reads, without writing files or spawning
//! processes, and reports all problems at once instead of stopping at the
//! first one.

use crate::cli::ValidateArgs;
use crate::context::ProjectContext;
use crate::docs::load_document;
use crate::error::{LessonPlannerError, Result};
use crate::lesson::{missing_sections, read_lesson};
use crate::prompt::{load_template, missing_markers, unknown_markers};

/// Execute the `lesson-planner validate` command.
///
/// Missing inputs fail immediately with their usual error. Missing lesson
/// sections and template markers are collected and reported together as a
/// single `InvalidLesson` error.
pub fn cmd_validate(ctx: &ProjectContext, args: ValidateArgs) -> Result<()> {
    let config = &ctx.config;

    let lesson = read_lesson(ctx, &args.lesson)?;
    load_document(ctx, &config.voice_and_tone_doc)?;
    load_document(ctx, &config.repository_structure_doc)?;
    let template = load_template(ctx)?;

    let lesson_path = ctx.lesson_relative_path(&args.lesson);
    let template_path = ctx.template_relative_path();
    let sections = missing_sections(&lesson);
    let markers = missing_markers(&template);

    println!("Validating lesson: {}", args.lesson);
    println!();

    for section in &sections {
        println!("  ✗ {}: missing section '{}'", lesson_path.display(), section);
    }
    for marker in &markers {
        println!("  ✗ {}: missing marker {}", template_path.display(), marker);
    }
    for token in unknown_markers(&template) {
        println!(
            "  ! {}: unrecognised marker {} (left as-is)",
            template_path.display(),
            token
        );
    }

    let problems = sections.len() + markers.len();
    if problems > 0 {
        println!();
        return Err(LessonPlannerError::InvalidLesson(format!(
            "{} problem(s) found for lesson '{}'",
            problems, args.lesson
        )));
    }

    println!("  ✓ {} has all required sections", lesson_path.display());
    println!("  ✓ {} has all markers", template_path.display());
    println!();
    println!("✅ Lesson '{}' is ready for generation.", args.lesson);
    Ok(())
}
