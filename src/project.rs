//! Project root discovery
//!
//! The tool may be invoked from anywhere inside a project; the configuration
//! and the files it names live at the root. The root is the nearest ancestor
//! directory containing one of the marker entries.

use std::env;
use std::path::{Path, PathBuf};

/// Entries that identify a project root
pub const ROOT_MARKERS: &[&str] = &["ebump.toml", ".git"];

/// Find the project root starting from the current working directory.
///
/// Falls back to the current directory when no marker is found anywhere up
/// the tree.
pub fn find_project_root() -> PathBuf {
    match env::current_dir() {
        Ok(cwd) => root_from(&cwd),
        Err(_) => PathBuf::from("."),
    }
}

/// Find the project root starting from an explicit directory.
pub fn root_from(start: &Path) -> PathBuf {
    let mut dir = start.to_path_buf();
    loop {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
            return dir;
        }
        if !dir.pop() {
            return start.to_path_buf();
        }
    }
}
