//! Prompt assembly for lesson generation.
//!
//! - **Template**: marker definitions and the pure substitution pass
//! - **Builder**: reads the template file and renders it
//!
//! # Markers
//!
//! The template references five markers, each replaced verbatim:
//!
//! ```text
//! {{lesson_content}}  {{voice_and_tone}}  {{repository_structure}}
//! {{target_repo}}     {{branch_name}}
//! ```

mod builder;
mod template;

pub use builder::{build_prompt, load_template};
pub use template::{Marker, PromptInputs, missing_markers, render_prompt, unknown_markers};
