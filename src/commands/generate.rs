//! Implementation of the `lesson-planner generate` command.
//!
//! Runs the pipeline in order, stopping at the first failure:
//! 1. Load and validate the lesson
//! 2. Load the voice/tone and repository-structure documents
//! 3. Build the prompt from the template
//! 4. Save the inspection copy of the prompt
//! 5. Invoke the agent in the target repository
//! 6. Push the branch when `--push-to-origin` is set

use crate::agent::{AgentInvocation, AgentRequest, invoke_agent, prepare_working_dir};
use crate::cli::GenerateArgs;
use crate::context::ProjectContext;
use crate::docs::load_document;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::git::push_branch;
use crate::lesson::load_lesson;
use crate::naming::default_branch_name;
use crate::prompt::{PromptInputs, build_prompt};
use std::time::Duration;
use tracing::debug;

/// Execute the `lesson-planner generate` command.
pub fn cmd_generate(ctx: &ProjectContext, args: GenerateArgs) -> Result<()> {
    let config = &ctx.config;
    let branch = args.branch.clone().unwrap_or_else(default_branch_name);
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.agent.default_model.clone());
    let target_repo = ctx.target_repo_path(&args.target_repo);
    let target_display = args.target_repo.to_string_lossy().to_string();
    let timeout = args
        .timeout_seconds
        .or(config.agent.timeout_seconds)
        .map(Duration::from_secs);

    if args.validate_prompts {
        debug!("--validate-prompts has no effect on generation");
    }

    println!("🚀 Generating lesson: {}", args.lesson);
    println!("📁 Target repository: {}", target_display);
    println!("🌿 Branch: {}", branch);
    println!("🤖 Model: {}", model);
    println!();

    println!("📖 Loading lesson specification...");
    let lesson_content = load_lesson(ctx, &args.lesson)?;

    println!("📚 Loading documentation...");
    let voice_and_tone = load_document(ctx, &config.voice_and_tone_doc)?;
    let repository_structure = load_document(ctx, &config.repository_structure_doc)?;

    println!("✍️  Building prompt for Goose...");
    let prompt = build_prompt(
        ctx,
        &PromptInputs {
            lesson_content: &lesson_content,
            voice_and_tone: &voice_and_tone,
            repository_structure: &repository_structure,
            target_repo: &target_display,
            branch_name: &branch,
        },
    )?;

    let inspection_path = ctx.inspection_prompt_path();
    atomic_write_file(&inspection_path, &prompt)?;
    println!("💾 Prompt saved to: {}", inspection_path.display());
    println!();

    if args.dry_run {
        let prompt_path = prepare_working_dir(&target_repo, &config.prompt_marker_file, &prompt)?;
        let invocation = AgentInvocation::new(&config.agent, &prompt, &model, &target_repo);
        let prompt_ref = format!("$(cat {})", prompt_path.display());

        println!("Dry run - agent not invoked.");
        println!();
        println!("  Working dir: {}", target_repo.display());
        println!("  Command:     {}", invocation.display_command_line(&prompt_ref));
        if args.push_to_origin {
            println!(
                "  Then:        git push {} {}:{}",
                config.remote, branch, branch
            );
        }
        return Ok(());
    }

    println!("🦆 Invoking Goose...");
    invoke_agent(
        &config.agent,
        &AgentRequest {
            prompt: &prompt,
            model: &model,
            working_dir: &target_repo,
            prompt_file_name: &config.prompt_marker_file,
            timeout,
        },
    )?;

    if args.push_to_origin {
        println!();
        println!("📤 Pushing branch to {}...", config.remote);
        push_branch(&target_repo, &config.remote, &branch)?;
    }

    println!();
    println!("✅ Lesson generation complete!");
    println!("📁 Repository: {}", target_display);
    println!("🌿 Branch: {}", branch);

    Ok(())
}
