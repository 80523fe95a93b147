//! Repository root discovery.
//!
//! Walks upward from a starting directory looking for a `.git` entry. The
//! entry may be a directory (regular checkout) or a file (worktrees and
//! submodules), and the directory holding it is the repository root.

use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` (including `start` itself) that
/// contains a `.git` entry and return that directory.
///
/// Relative starts are resolved against the current directory first.
/// Returns `None` when no ancestor up to the filesystem root has one.
pub fn find_root(start: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    let root = absolute
        .ancestors()
        .find(|dir| dir.join(".git").symlink_metadata().is_ok())
        .map(Path::to_path_buf);

    match &root {
        Some(root) => log::debug!("Repository root for {}: {}", start.display(), root.display()),
        None => log::debug!("No repository above {}", start.display()),
    }

    root
}
