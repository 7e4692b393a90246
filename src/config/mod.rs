//! Configuration model for lesson-planner.
//!
//! This module defines the Config struct that represents `lesson-planner.yaml`.
//! Every field is optional in the YAML; missing fields fall back to the
//! conventional layout (`lessons/`, `docs/`, `templates/`) and the `goose`
//! agent defaults. Unknown fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::AgentSettings;
