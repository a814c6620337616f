//! Presentation of enumerated paths: directory suffixes, ordering, and the
//! optional existence check that splits output between two sinks.
//!
//! Lines are kept as `OsString` end to end so names that are not UTF-8 are
//! printed, and checked, byte for byte.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Render a path, appending the separator when it is currently a directory.
///
/// The directory check hits the live filesystem at call time.
pub fn format_path(path: &Path) -> OsString {
    let mut formatted = path.as_os_str().to_os_string();
    if path.is_dir() {
        formatted.push(MAIN_SEPARATOR.to_string());
    }
    formatted
}

/// Format, sort and deduplicate enumerated paths.
pub fn render_listing<I>(paths: I) -> Vec<OsString>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut lines: Vec<OsString> = paths.into_iter().map(|path| format_path(&path)).collect();
    lines.sort_unstable();
    lines.dedup();
    lines
}

/// Counts of lines written by [`write_listing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub listed: usize,
    pub missing: usize,
}

/// Write one line per entry to `out`.
///
/// With `verify`, a line whose path no longer exists (neither as itself nor
/// as a symlink) goes to `err` instead.
pub fn write_listing<O, E>(
    lines: &[OsString],
    verify: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<ListingSummary>
where
    O: Write,
    E: Write,
{
    let mut summary = ListingSummary::default();
    for line in lines {
        if verify && Path::new(line).symlink_metadata().is_err() {
            write_line(err, line)?;
            summary.missing += 1;
        } else {
            write_line(out, line)?;
            summary.listed += 1;
        }
    }
    out.flush()?;
    err.flush()?;
    Ok(summary)
}

#[cfg(unix)]
fn write_line<W: Write>(sink: &mut W, line: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    sink.write_all(line.as_bytes())?;
    sink.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_line<W: Write>(sink: &mut W, line: &OsStr) -> io::Result<()> {
    writeln!(sink, "{}", line.to_string_lossy())
}
