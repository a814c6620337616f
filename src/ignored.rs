//! Ignored-file enumeration across a directory tree.
//!
//! A directory contributes ignored entries from two places:
//!
//! 1. every repository root found at or below it, each queried on its own and
//!    joined under that root's path;
//! 2. when the directory is not itself a repository root, the enclosing
//!    repository (if any), queried from the directory so that only entries
//!    beneath it are reported.
//!
//! Both contributions are produced by independent status queries, which the
//! configured [`ExecutionStrategy`] schedules.

use crate::discovery::RepositoryWalker;
use crate::error::ToolError;
use crate::git::{find_git_root, is_repository_root, query_ignored, GitRoot, StatusOptions};
use crate::strategy::ExecutionStrategy;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// One independent status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTask {
    /// A directory holding `.git`; records join under it.
    Repository(PathBuf),
    /// A directory inside some enclosing repository.
    Subdirectory(PathBuf),
}

/// Enumerates ignored paths under a directory.
#[derive(Debug, Clone, Default)]
pub struct IgnoredFiles {
    options: StatusOptions,
    strategy: ExecutionStrategy,
}

impl IgnoredFiles {
    pub fn new(options: StatusOptions, strategy: ExecutionStrategy) -> Self {
        Self { options, strategy }
    }

    pub fn options(&self) -> &StatusOptions {
        &self.options
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// The queries needed to cover `directory`: one per repository root at or
    /// below it, plus one for the enclosing repository when `directory` is
    /// not a root itself.
    pub fn plan(&self, directory: &Path) -> Vec<QueryTask> {
        let mut tasks: Vec<QueryTask> = RepositoryWalker::new(directory)
            .roots()
            .map(QueryTask::Repository)
            .collect();
        if !is_repository_root(directory) {
            tasks.push(QueryTask::Subdirectory(directory.to_path_buf()));
        }
        tasks
    }

    /// Every ignored path under `directory`, unsorted and possibly repeated.
    pub async fn collect(&self, directory: &Path) -> Vec<PathBuf> {
        let tasks = self.plan(directory);
        info!(
            directory = %directory.display(),
            queries = tasks.len(),
            strategy = ?self.strategy,
            "Enumerating ignored files"
        );

        let queries: Vec<_> = tasks.iter().map(|task| self.run(task)).collect();
        self.strategy
            .run_all(queries)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// [`IgnoredFiles::collect`] on a current-thread runtime that lives only
    /// for this call.
    pub fn collect_blocking(&self, directory: &Path) -> Result<Vec<PathBuf>, ToolError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ToolError::Runtime(e.to_string()))?;
        Ok(runtime.block_on(self.collect(directory)))
    }

    async fn run(&self, task: &QueryTask) -> Vec<PathBuf> {
        match task {
            QueryTask::Repository(root) => repository_ignored(root, &self.options).await,
            QueryTask::Subdirectory(directory) => {
                subdirectory_ignored(directory, &self.options).await
            }
        }
    }
}

/// Ignored paths of the repository rooted at `root`, joined under `root`.
pub async fn repository_ignored(root: &Path, options: &StatusOptions) -> Vec<PathBuf> {
    query_ignored(root, options)
        .await
        .into_iter()
        .map(|record| join_normalized(root, &record))
        .collect()
}

/// Ignored paths beneath `directory` as seen by its enclosing repository.
///
/// An absolute `directory` yields absolute paths under the resolved root. A
/// relative one yields paths under `directory` itself, so output stays
/// relative to the caller's working directory.
pub async fn subdirectory_ignored(directory: &Path, options: &StatusOptions) -> Vec<PathBuf> {
    let Some(git_root) = find_git_root(directory) else {
        debug!(directory = %directory.display(), "Not inside a repository");
        return Vec::new();
    };
    debug!(
        directory = %directory.display(),
        root = %git_root.root().display(),
        offset = %git_root.offset().display(),
        "Resolved enclosing repository"
    );

    query_ignored(directory, options)
        .await
        .into_iter()
        .map(|record| reroot(&git_root, directory, &record))
        .collect()
}

/// Express a root-relative `record` for a caller that asked about `directory`.
fn reroot(git_root: &GitRoot, directory: &Path, record: &Path) -> PathBuf {
    if !directory.is_absolute() {
        if let Ok(rest) = record.strip_prefix(git_root.offset()) {
            return join_normalized(directory, rest);
        }
    }
    join_normalized(git_root.root(), record)
}

/// Join `relative` onto `base`, dropping `.` components; an empty result is `.`.
pub fn join_normalized(base: &Path, relative: &Path) -> PathBuf {
    let joined: PathBuf = base
        .components()
        .chain(relative.components())
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if joined.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        joined
    }
}
