//! gitignored: list git-ignored files across nested repositories.
//!
//! The core enumerator finds every repository root at or below a directory,
//! plus the repository enclosing it, and asks `git status` for ignored
//! entries in each. The crate also ships two small companions: `diffpath`,
//! which compares the commands reachable through two search paths, and
//! `devbox-concat`, which merges JSON configuration fragments.

pub mod cli;
pub mod config;
pub mod devbox;
pub mod diffpath;
pub mod discovery;
pub mod error;
pub mod git;
pub mod ignored;
pub mod listing;
pub mod logging;
pub mod strategy;
