//! Repository discovery: find every repository root at or below a directory.

use crate::git::GIT_MARKER;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Walks a tree looking for `.git` entries.
///
/// Each hit yields its parent directory, expressed under the walk root exactly
/// as given (a relative root produces relative repository paths). Symlinks are
/// not followed, so link cycles cannot loop. The walk never descends into a
/// `.git` directory. Unreadable entries are logged and skipped.
pub struct RepositoryWalker {
    root: PathBuf,
}

impl RepositoryWalker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lazily yield repository roots, in file-name order per directory.
    pub fn roots(&self) -> impl Iterator<Item = PathBuf> {
        let mut entries = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        std::iter::from_fn(move || loop {
            let entry = match entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry during discovery");
                    continue;
                }
            };
            if entry.depth() == 0 || entry.file_name() != GIT_MARKER {
                continue;
            }
            if entry.file_type().is_dir() {
                entries.skip_current_dir();
            }
            if let Some(parent) = entry.path().parent() {
                debug!(repository = %parent.display(), "Found repository");
                return Some(parent.to_path_buf());
            }
        })
    }
}
