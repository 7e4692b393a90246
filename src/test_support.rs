use crate::lesson::REQUIRED_SECTIONS;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Lesson text containing every required section.
pub(crate) fn complete_lesson_text() -> String {
    let mut text = String::new();
    for section in REQUIRED_SECTIONS {
        text.push_str(section);
        text.push_str("\n\nDetails.\n\n");
    }
    text
}

/// Write a project layout (lesson, both docs, template) under `root`.
pub(crate) fn write_project(root: &Path, lesson_name: &str, template: &str) {
    std::fs::create_dir_all(root.join("lessons")).unwrap();
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::create_dir_all(root.join("templates")).unwrap();

    std::fs::write(
        root.join("lessons").join(format!("{}.md", lesson_name)),
        complete_lesson_text(),
    )
    .unwrap();
    std::fs::write(root.join("docs/voice-and-tone.md"), "Be warm.").unwrap();
    std::fs::write(root.join("docs/repository-structure.md"), "One crate.").unwrap();
    std::fs::write(root.join("templates/lesson-generation-prompt.md"), template).unwrap();
}

/// Write an executable stand-in for the agent that exits with `exit_code`.
///
/// It records its arguments (one per line) to `agent-args.txt` and the value of
/// `LESSON_STUB_ENV` to `agent-env.txt`, both in its working directory.
#[cfg(unix)]
pub(crate) fn write_stub_agent(dir: &Path, exit_code: i32) -> PathBuf {
    let body = format!(
        "printf '%s\\n' \"$@\" > agent-args.txt\n\
         printf '%s' \"${{LESSON_STUB_ENV:-}}\" > agent-env.txt\n\
         echo 'stub agent stdout'\n\
         echo 'stub agent stderr' >&2\n\
         exit {}\n",
        exit_code
    );
    write_script(dir, &format!("stub-agent-{}.sh", exit_code), &body)
}

/// Write an executable `/bin/sh` script named `name` with the given body.
#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A working repository at `<tmp>/work` whose `origin` is a bare repository
/// at `<tmp>/origin.git`.
pub(crate) struct RepoWithRemote {
    pub(crate) _temp_dir: TempDir,
    pub(crate) work: PathBuf,
    pub(crate) origin: PathBuf,
}

pub(crate) fn create_test_repo_with_remote() -> RepoWithRemote {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    let origin = temp_dir.path().join("origin.git");
    std::fs::create_dir_all(&work).unwrap();

    git(temp_dir.path(), &["init", "--bare", "origin.git"]);

    git(&work, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&work, &["config", "user.email", "test@example.com"]);
    git(&work, &["config", "user.name", "Test User"]);

    std::fs::write(work.join("README.md"), "# Test\n").unwrap();
    git(&work, &["add", "."]);
    git(&work, &["commit", "-m", "Initial commit"]);

    let origin_str = origin.to_string_lossy().to_string();
    git(&work, &["remote", "add", "origin", &origin_str]);

    RepoWithRemote {
        _temp_dir: temp_dir,
        work,
        origin,
    }
}

/// Resolve `rev` in `repo_dir`, returning `None` when it does not exist.
pub(crate) fn rev_parse(repo_dir: &Path, rev: &str) -> Option<String> {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "--verify", "--quiet", rev])
        .output()
        .unwrap();
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
