//! Git integration: repository-boundary detection and ignored-status queries.

pub mod root;
pub mod status;

pub use root::{find_git_root, is_repository_root, GitRoot, GIT_MARKER};
pub use status::{parse_status_output, query_ignored, PorcelainVersion, StatusOptions};
