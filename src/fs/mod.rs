//! Filesystem utilities for lesson-planner.
//!
//! Both prompt copies are written with [`atomic_write_file`] so an
//! interrupted run never leaves a truncated prompt behind.

pub mod atomic;

pub use atomic::atomic_write_file;
pub use atomic::ensure_dir;
