//! Integration tests for ignored-file enumeration against real repositories.

use crate::integration::test_utils::{
    canonical_root, git_available, init_repo, sample_repo, write_file,
};
use gitignored::git::{PorcelainVersion, StatusOptions};
use gitignored::ignored::{IgnoredFiles, QueryTask};
use gitignored::listing::{render_listing, write_listing};
use gitignored::strategy::ExecutionStrategy;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tempfile::TempDir;

fn list(enumerator: &IgnoredFiles, directory: &Path) -> Vec<String> {
    render_listing(enumerator.collect_blocking(directory).unwrap())
        .into_iter()
        .map(|line| line.into_string().unwrap())
        .collect()
}

fn expected(root: &Path, entries: &[&str]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("{}/{}", root.display(), entry))
        .collect()
}

fn concurrent(jobs: usize) -> ExecutionStrategy {
    ExecutionStrategy::from_jobs(NonZeroUsize::new(jobs).unwrap())
}

#[test]
fn test_repository_root_lists_ignored_entries() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);

    let lines = list(&IgnoredFiles::default(), &root);
    assert_eq!(lines, expected(&root, &["app.log", "build/", "venv/"]));
}

#[test]
fn test_repository_root_plans_a_single_query() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);

    let plan = IgnoredFiles::default().plan(&root);
    assert_eq!(plan, vec![QueryTask::Repository(root.clone())]);
}

#[test]
fn test_subdirectory_matches_filtered_root_listing() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);
    write_file(&root, "pkg/a.log", "log");
    write_file(&root, "pkg/build/x", "x");
    write_file(&root, "pkg/lib.rs", "");

    let enumerator = IgnoredFiles::default();
    let pkg = root.join("pkg");
    let from_subdirectory = list(&enumerator, &pkg);
    assert_eq!(from_subdirectory, expected(&root, &["pkg/a.log", "pkg/build/"]));

    let prefix = format!("{}/", pkg.display());
    let filtered: Vec<String> = list(&enumerator, &root)
        .into_iter()
        .filter(|line| line.starts_with(&prefix))
        .collect();
    assert_eq!(from_subdirectory, filtered);
}

#[test]
fn test_nested_repositories_under_plain_tree() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    let alpha = root.join("work/alpha");
    let beta = root.join("work/beta");
    init_repo(&alpha);
    init_repo(&beta);
    write_file(&alpha, ".gitignore", "*.tmp\n");
    write_file(&alpha, "x.tmp", "");
    write_file(&alpha, "keep.txt", "");
    write_file(&beta, ".gitignore", "dist/\n");
    write_file(&beta, "dist/bundle.js", "");

    let lines = list(&IgnoredFiles::default(), &root);
    assert_eq!(
        lines,
        expected(&root, &["work/alpha/x.tmp", "work/beta/dist/"])
    );
}

#[test]
fn test_nested_repository_inside_enclosing_repository() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);
    let inner = root.join("vendor/lib");
    init_repo(&inner);
    write_file(&inner, ".gitignore", "target/\n");
    write_file(&inner, "target/debug.o", "");
    write_file(&root, "vendor/notes.log", "");

    let vendor = root.join("vendor");
    let plan = IgnoredFiles::default().plan(&vendor);
    assert_eq!(
        plan,
        vec![
            QueryTask::Repository(inner.clone()),
            QueryTask::Subdirectory(vendor.clone()),
        ]
    );

    let lines = list(&IgnoredFiles::default(), &vendor);
    assert_eq!(
        lines,
        expected(&root, &["vendor/lib/target/", "vendor/notes.log"])
    );
}

#[test]
fn test_strategies_produce_identical_listings() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    for name in ["one", "two", "three", "four"] {
        let repo = root.join(name);
        init_repo(&repo);
        write_file(&repo, ".gitignore", "*.o\ncache/\n");
        write_file(&repo, "main.o", "");
        write_file(&repo, "cache/entry", "");
    }

    let sequential = list(
        &IgnoredFiles::new(StatusOptions::default(), ExecutionStrategy::Sequential),
        &root,
    );
    let overlapped = list(
        &IgnoredFiles::new(StatusOptions::default(), concurrent(3)),
        &root,
    );
    assert_eq!(sequential.len(), 8);
    assert_eq!(sequential, overlapped);
}

#[test]
fn test_expand_directory_lists_files_inside_ignored_directories() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);

    let options = StatusOptions {
        expand_directory: true,
        ..StatusOptions::default()
    };
    let lines = list(
        &IgnoredFiles::new(options, ExecutionStrategy::Sequential),
        &root,
    );
    assert_eq!(
        lines,
        expected(&root, &["app.log", "build/out.o", "venv/bin/python"])
    );
}

#[test]
fn test_porcelain_versions_agree() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);
    write_file(&root, "pkg/a.log", "log");

    for directory in [root.clone(), root.join("pkg")] {
        let v1 = list(&IgnoredFiles::default(), &directory);
        let v2 = list(
            &IgnoredFiles::new(
                StatusOptions {
                    version: PorcelainVersion::V2,
                    ..StatusOptions::default()
                },
                ExecutionStrategy::Sequential,
            ),
            &directory,
        );
        assert!(!v1.is_empty());
        assert_eq!(v1, v2);
    }
}

#[test]
fn test_directory_outside_any_repository_is_empty() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    write_file(&root, "plain/file.log", "");

    // Only meaningful when the temp dir is not itself inside a checkout.
    if gitignored::git::find_git_root(&root).is_some() {
        return;
    }
    assert!(list(&IgnoredFiles::default(), &root.join("plain")).is_empty());
}

#[test]
fn test_verify_routes_deleted_entries_to_err() {
    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    sample_repo(&root);

    let lines = render_listing(IgnoredFiles::default().collect_blocking(&root).unwrap());
    fs::remove_file(root.join("app.log")).unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = write_listing(&lines, true, &mut out, &mut err).unwrap();

    let app_log = format!("{}/app.log\n", root.display());
    let out = String::from_utf8(out).unwrap();
    assert_eq!(String::from_utf8(err).unwrap(), app_log);
    assert!(!out.contains("app.log"));
    assert_eq!(summary.listed, 2);
    assert_eq!(summary.missing, 1);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_ignored_name_is_listed_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    if !git_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    init_repo(&root);
    write_file(&root, ".gitignore", "*.log\n");
    let name = OsStr::from_bytes(b"bad\xff.log");
    let path = root.join(name);
    fs::write(&path, "log").unwrap();

    let enumerator = IgnoredFiles::default();
    let lines = render_listing(enumerator.collect_blocking(&root).unwrap());
    assert_eq!(lines, vec![path.clone().into_os_string()]);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = write_listing(&lines, true, &mut out, &mut err).unwrap();
    let mut expected = path.into_os_string().into_vec();
    expected.push(b'\n');
    assert_eq!(out, expected);
    assert!(err.is_empty());
    assert_eq!(summary.missing, 0);
}
