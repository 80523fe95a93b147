//! Two-character git status codes and their display categories.
//!
//! This module defines [`StatusCode`], the `XY` pair git prints in porcelain
//! output (index state followed by worktree state), and [`HighlightCategory`],
//! the five display classes a code can collapse into.
//!
//! # Public API
//! - [`StatusCode`]: Typed two-character status code
//! - [`HighlightCategory`]: Display category with fixed resolution order
//!
//! # Resolution Order
//! Index-state flags win over worktree-state flags, first match wins:
//! `A? > M? > R? > D? > ?M > ?D > ??`. Anything else has no category.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Git porcelain status code, `XY` where X is the index state and Y the
/// worktree state (e.g. `"AM"`, `"R "`, `"??"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    index: char,
    worktree: char,
}

impl StatusCode {
    pub const UNTRACKED: StatusCode = StatusCode::new('?', '?');
    pub const UNMERGED: StatusCode = StatusCode::new('U', 'U');

    pub const fn new(index: char, worktree: char) -> Self {
        Self { index, worktree }
    }

    /// Build a code from the first two characters of `record`.
    /// Returns `None` when fewer than two characters are available.
    pub fn parse(record: &str) -> Option<Self> {
        let mut chars = record.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        Some(Self { index, worktree })
    }

    /// Staged (index) state character
    pub fn index(&self) -> char {
        self.index
    }

    /// Unstaged (worktree) state character
    pub fn worktree(&self) -> char {
        self.worktree
    }

    pub fn is_untracked(&self) -> bool {
        *self == Self::UNTRACKED
    }

    pub fn is_rename(&self) -> bool {
        self.index == 'R'
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.index, self.worktree)
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match (StatusCode::parse(&raw), raw.chars().count()) {
            (Some(code), 2) => Ok(code),
            _ => Err(serde::de::Error::custom(format!(
                "expected a two-character status code, got {raw:?}"
            ))),
        }
    }
}

/// Display category a status code resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightCategory {
    Added,
    Modified,
    Renamed,
    Deleted,
    Untracked,
}

impl HighlightCategory {
    pub const ALL: [HighlightCategory; 5] = [
        HighlightCategory::Added,
        HighlightCategory::Modified,
        HighlightCategory::Renamed,
        HighlightCategory::Deleted,
        HighlightCategory::Untracked,
    ];

    /// Resolve a status code to its category.
    ///
    /// The order is a fixed rule: staged changes are reported before
    /// worktree changes, so `"AM"` is [`HighlightCategory::Added`].
    pub fn from_code(code: StatusCode) -> Option<HighlightCategory> {
        match code.index() {
            'A' => return Some(HighlightCategory::Added),
            'M' => return Some(HighlightCategory::Modified),
            'R' => return Some(HighlightCategory::Renamed),
            'D' => return Some(HighlightCategory::Deleted),
            _ => {}
        }

        match code.worktree() {
            'M' => return Some(HighlightCategory::Modified),
            'D' => return Some(HighlightCategory::Deleted),
            _ => {}
        }

        if code.is_untracked() {
            return Some(HighlightCategory::Untracked);
        }

        None
    }

    /// Highlight group name used by the host's annotation API
    pub fn group_name(&self) -> &'static str {
        match self {
            HighlightCategory::Added => "GitOverlayAdded",
            HighlightCategory::Modified => "GitOverlayModified",
            HighlightCategory::Renamed => "GitOverlayRenamed",
            HighlightCategory::Deleted => "GitOverlayDeleted",
            HighlightCategory::Untracked => "GitOverlayUntracked",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            HighlightCategory::Added => "added",
            HighlightCategory::Modified => "modified",
            HighlightCategory::Renamed => "renamed",
            HighlightCategory::Deleted => "deleted",
            HighlightCategory::Untracked => "untracked",
        }
    }
}

impl fmt::Display for HighlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
