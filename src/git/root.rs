//! Repository root resolution.
//!
//! A repository boundary is any directory holding a `.git` entry (a directory
//! for ordinary clones, a file for worktrees and submodules). Nothing is cached:
//! every call probes the filesystem again.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the entry that marks a repository root.
pub const GIT_MARKER: &str = ".git";

/// A resolved repository root together with the way back down to the
/// directory the search started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRoot {
    root: PathBuf,
    offset: PathBuf,
}

impl GitRoot {
    /// Absolute, canonical path of the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the starting directory relative to [`GitRoot::root`]; empty
    /// when the search started at the root itself.
    pub fn offset(&self) -> &Path {
        &self.offset
    }
}

/// Whether `directory` directly contains a `.git` entry.
pub fn is_repository_root(directory: &Path) -> bool {
    directory.join(GIT_MARKER).exists()
}

/// Walk upward from `start` to the nearest directory containing `.git`.
///
/// `start` is canonicalized first, so relative paths and symlinks resolve the
/// way the kernel sees them. Returns `None` when the filesystem root is
/// reached without finding a marker, or when `start` cannot be resolved.
pub fn find_git_root(start: &Path) -> Option<GitRoot> {
    let start = match dunce::canonicalize(start) {
        Ok(path) => path,
        Err(e) => {
            debug!(directory = %start.display(), error = %e, "Cannot resolve directory");
            return None;
        }
    };

    let mut current = start.as_path();
    let mut segments: Vec<&OsStr> = Vec::new();
    loop {
        if is_repository_root(current) {
            let offset: PathBuf = segments.iter().rev().copied().collect();
            return Some(GitRoot {
                root: current.to_path_buf(),
                offset,
            });
        }
        debug!(directory = %current.display(), "No repository marker, walking up");
        segments.push(current.file_name()?);
        current = current.parent()?;
    }
}
