//! Shared test utilities for integration tests
//!
//! Provides repository fixtures, git isolation, and XDG directory setup so
//! tests do not depend on the user's git or tool configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, Once};
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

static GIT_ISOLATION: Once = Once::new();

/// Variables that stop git from reading the user's global or system config,
/// including any global excludes file.
const GIT_ISOLATION_ENV: [(&str, &str); 5] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_CONFIG_COUNT", "1"),
    ("GIT_CONFIG_KEY_0", "core.excludesFile"),
    ("GIT_CONFIG_VALUE_0", "/dev/null"),
];

/// Isolate git for in-process queries. Idempotent.
pub fn isolate_git() {
    GIT_ISOLATION.call_once(|| {
        for (key, value) in GIT_ISOLATION_ENV {
            std::env::set_var(key, value);
        }
    });
}

/// Whether a usable `git` is on PATH. Tests needing real git return early
/// when it is not.
pub fn git_available() -> bool {
    isolate_git();
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// `git init` in `path`, creating it first.
pub fn init_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    let status = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .envs(GIT_ISOLATION_ENV)
        .status()
        .unwrap();
    assert!(status.success(), "git init failed in {}", path.display());
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Canonical path of a fresh temp dir, so expected paths match resolved roots.
pub fn canonical_root(temp: &TempDir) -> PathBuf {
    dunce::canonicalize(temp.path()).unwrap()
}

/// Repository with ignored `build/` and `venv/` directories, an ignored
/// `app.log`, and a tracked-looking `src/main.rs`.
pub fn sample_repo(root: &Path) {
    init_repo(root);
    write_file(root, ".gitignore", "build/\nvenv/\n*.log\n");
    write_file(root, "build/out.o", "obj");
    write_file(root, "venv/bin/python", "#!/bin/sh\n");
    write_file(root, "app.log", "log");
    write_file(root, "src/main.rs", "fn main() {}\n");
}

/// A binary under test with git and tool configuration isolated.
pub fn tool_command(bin: &str, config_home: &Path) -> Command {
    let mut command = Command::new(bin);
    command
        .envs(GIT_ISOLATION_ENV)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("GITIGNORED_LOG", "off");
    command
}

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir`.
///
/// A global mutex serializes callers; the original values are restored
/// afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_config_home).unwrap();
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}
