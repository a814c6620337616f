//! Compare the commands reachable through two colon-separated search paths.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Which side of the comparison a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A command found on exactly one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueCommand {
    pub name: String,
    pub side: Side,
}

impl UniqueCommand {
    /// Left-only commands print bare, right-only ones behind a tab.
    pub fn render(&self) -> String {
        match self.side {
            Side::Left => self.name.clone(),
            Side::Right => format!("\t{}", self.name),
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Names of executable regular files in each directory of `search_path`.
///
/// Symlinks are followed; directories that cannot be read are skipped.
pub fn list_executables(search_path: &str) -> BTreeSet<String> {
    let mut executables = BTreeSet::new();
    for dir in search_path.split(':').filter(|dir| !dir.is_empty()) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(directory = dir, error = %e, "Skipping unreadable search path entry");
                continue;
            }
        };
        for entry in entries.filter_map(Result::ok) {
            if !is_executable(&entry.path()) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                executables.insert(name.to_string());
            }
        }
    }
    executables
}

/// Sorted symmetric difference of two command sets.
pub fn diff_commands(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Vec<UniqueCommand> {
    left.symmetric_difference(right)
        .map(|name| UniqueCommand {
            name: name.clone(),
            side: if left.contains(name) {
                Side::Left
            } else {
                Side::Right
            },
        })
        .collect()
}

/// Compare two search paths.
pub fn diff_search_paths(left: &str, right: &str) -> Vec<UniqueCommand> {
    diff_commands(&list_executables(left), &list_executables(right))
}
