//! Atomic filesystem operations for lesson-planner.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//!
//! `rename` replaces an existing target atomically on POSIX and uses
//! `MOVEFILE_REPLACE_EXISTING` on Windows. Source and destination share a
//! directory, so they are always on the same filesystem.

use crate::error::{LessonPlannerError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| LessonPlannerError::WriteFailed {
        path: dir.to_path_buf(),
        source,
    })
}

/// Atomically write bytes to a file.
///
/// The parent directory is created when missing. On failure the target is
/// left as it was and the temporary file is removed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        ensure_dir(parent)?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        LessonPlannerError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        LessonPlannerError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    sync_parent_dir(path);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary sibling of `target`: `.{filename}.{pid}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LessonPlannerError::WriteFailed {
            path: target.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        })?;

    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(parent.join(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
