//! Diagnostic tracing for lesson-planner.
//!
//! Progress lines for the operator are plain `println!` output. This module
//! only sets up `tracing` diagnostics, which go to stderr and are filtered by
//! `RUST_LOG` (default `warn`).
//!
//! ```bash
//! RUST_LOG=lesson_planner=debug lesson-planner generate --lesson intro --target-repo ../intro
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Safe to call once per process.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
