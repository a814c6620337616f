//! Ignored-status query: run `git status` for one directory and extract the
//! entries marked as ignored.

use crate::error::ToolError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// `git status --porcelain` format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PorcelainVersion {
    #[default]
    V1,
    V2,
}

impl PorcelainVersion {
    /// Prefix of a record describing an ignored entry.
    pub fn ignored_marker(self) -> &'static str {
        match self {
            PorcelainVersion::V1 => "!! ",
            PorcelainVersion::V2 => "! ",
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PorcelainVersion::V1 => 1,
            PorcelainVersion::V2 => 2,
        }
    }

    fn flag(self) -> &'static str {
        match self {
            PorcelainVersion::V1 => "--porcelain=1",
            PorcelainVersion::V2 => "--porcelain=2",
        }
    }
}

impl TryFrom<u8> for PorcelainVersion {
    type Error = ToolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PorcelainVersion::V1),
            2 => Ok(PorcelainVersion::V2),
            other => Err(ToolError::InvalidPorcelainVersion(other)),
        }
    }
}

impl fmt::Display for PorcelainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// How a status query is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    pub version: PorcelainVersion,
    /// List every file inside an ignored directory instead of the directory.
    pub expand_directory: bool,
    pub git_program: String,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            version: PorcelainVersion::default(),
            expand_directory: false,
            git_program: "git".to_string(),
        }
    }
}

impl StatusOptions {
    /// Arguments passed to the git program.
    pub fn args(&self) -> Vec<&'static str> {
        let mut args = vec![
            "status",
            ".",
            "--ignored",
            "--ignore-submodules=all",
            "--no-renames",
            self.version.flag(),
            "-z",
        ];
        if self.expand_directory {
            args.push("--untracked-files=all");
        }
        args
    }
}

/// Extract ignored paths from NUL-separated porcelain output.
///
/// Paths are relative to the repository root, as git prints them. Records are
/// handled as raw bytes so names that are not UTF-8 survive unchanged. The
/// trailing `/` git adds to directories is dropped; directory-ness is decided
/// later from the live filesystem.
pub fn parse_status_output(
    stdout: &[u8],
    version: PorcelainVersion,
) -> impl Iterator<Item = PathBuf> + '_ {
    let marker = version.ignored_marker().as_bytes();
    stdout
        .split(|byte| *byte == b'\0')
        .filter_map(move |record| record.strip_prefix(marker))
        .map(trim_trailing_slashes)
        .filter(|path| !path.is_empty())
        .map(path_from_bytes)
}

fn trim_trailing_slashes(mut path: &[u8]) -> &[u8] {
    while let Some(rest) = path.strip_suffix(b"/") {
        path = rest;
    }
    path
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

// git for Windows emits UTF-8 paths.
#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Run `git status` in `directory` and return the ignored paths it reports.
///
/// Any failure (git missing, not a repository, non-zero exit) is logged at
/// info level and yields no entries.
pub async fn query_ignored(directory: &Path, options: &StatusOptions) -> Vec<PathBuf> {
    let args = options.args();
    debug!(
        directory = %directory.display(),
        command = %format!("{} {}", options.git_program, args.join(" ")),
        "Running status query"
    );

    let output = match Command::new(&options.git_program)
        .args(&args)
        .current_dir(directory)
        .stdin(Stdio::null())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            info!(directory = %directory.display(), error = %e, "Failed to run git status");
            return Vec::new();
        }
    };

    if !output.status.success() {
        info!(
            directory = %directory.display(),
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
            "git status failed"
        );
        return Vec::new();
    }

    let paths: Vec<PathBuf> = parse_status_output(&output.stdout, options.version).collect();
    debug!(directory = %directory.display(), count = paths.len(), "Status query finished");
    paths
}
