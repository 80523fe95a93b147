//! Repository status fetching and porcelain parsing.
//!
//! This module turns the working-tree state of one repository into a
//! [`StatusMap`]: absolute file path to two-character [`StatusCode`]. Two
//! backends produce the same map:
//!
//! - [`GitCli`]: runs `git status --porcelain` in the repository root and
//!   parses its output with [`parse_porcelain`]
//! - [`LibGit2`]: reads the statuses in-process through `git2`
//!
//! Ignored files are never requested. Walking ignore rules over large trees
//! is the slow part of a status call and ignored files are never annotated.
//!
//! # Failure Model
//! [`StatusFetcher::fetch_status`] never fails: any error degrades to an
//! empty map ("no known changes"). Callers that need to tell a failed fetch
//! from a clean tree use [`StatusFetcher::try_fetch_status`].

use crate::core::error::{OverlayError, Result};
use crate::core::git_status::StatusCode;
use git2::{Repository, StatusOptions};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Absolute file path to status code, for one repository root
pub type StatusMap = HashMap<PathBuf, StatusCode>;

const RENAME_SEPARATOR: &str = " -> ";

/// Source of repository status snapshots
pub trait StatusFetcher {
    /// Fetch the full status of the repository at `root`
    fn try_fetch_status(&self, root: &Path) -> Result<StatusMap>;

    /// Fetch the status, treating any failure as "no changes"
    fn fetch_status(&self, root: &Path) -> StatusMap {
        match self.try_fetch_status(root) {
            Ok(status) => {
                log::debug!(
                    "Fetched {} status entries for {}",
                    status.len(),
                    root.display()
                );
                status
            }
            Err(e) => {
                log::debug!("Status fetch for {} failed, showing no changes: {e}", root.display());
                StatusMap::new()
            }
        }
    }
}

/// Parse `git status --porcelain` output into a [`StatusMap`] rooted at `root`.
///
/// Records shorter than three characters are skipped. For renames only the
/// new name is kept. Quoted paths are decoded with [`unquote_path`], and a
/// leading `./` is dropped before joining with `root`.
pub fn parse_porcelain(root: &Path, output: &str) -> StatusMap {
    let mut status = StatusMap::new();

    for line in output.lines() {
        if line.chars().count() < 3 {
            continue;
        }

        let Some(code) = StatusCode::parse(line) else {
            continue;
        };
        // Skip the two code characters and the separating space
        let mut path = line.char_indices().nth(3).map_or("", |(i, _)| &line[i..]);

        if code.is_rename() {
            path = rename_target(path);
        }

        let unquoted = unquote_path(path);
        let path = unquoted.strip_prefix("./").unwrap_or(&unquoted);
        status.insert(root.join(path), code);
    }

    status
}

/// New-name half of an `old -> new` rename field. A quoted old name may
/// itself contain the separator, so it is skipped as a whole.
fn rename_target(field: &str) -> &str {
    if field.starts_with('"') {
        if let Some(end) = closing_quote(field) {
            return field[end + 1..]
                .strip_prefix(RENAME_SEPARATOR)
                .unwrap_or(field);
        }
    }

    field
        .split_once(RENAME_SEPARATOR)
        .map_or(field, |(_, new_name)| new_name)
}

/// Byte offset of the quote closing a C-quoted field starting at offset 0
fn closing_quote(field: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, b) in field.bytes().enumerate().skip(1) {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Decode a path git wrapped in C-style quotes (`"caf\303\251.txt"`).
/// Unquoted paths are returned as they are.
pub fn unquote_path(field: &str) -> Cow<'_, str> {
    let Some(inner) = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Cow::Borrowed(field);
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b't') => bytes.push(b'\t'),
            Some(b'n') => bytes.push(b'\n'),
            Some(b'v') => bytes.push(0x0b),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&o @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(o - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }

    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Status backend running the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StatusFetcher for GitCli {
    fn try_fetch_status(&self, root: &Path) -> Result<StatusMap> {
        let output = Command::new(&self.program)
            .args(["status", "--porcelain"])
            .current_dir(root)
            .output()
            .map_err(|e| OverlayError::git_spawn_failed(&self.program, e))?;

        if !output.status.success() {
            return Err(OverlayError::git_status_failed(
                output.status.code(),
                &output.stderr,
            ));
        }

        Ok(parse_porcelain(root, &String::from_utf8_lossy(&output.stdout)))
    }
}

/// Status backend reading the repository in-process through libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct LibGit2;

impl LibGit2 {
    /// Fold git2 status flags into a porcelain-style two-character code
    pub fn code_from_flags(flags: git2::Status) -> Option<StatusCode> {
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(StatusCode::UNMERGED);
        }

        let index = if flags.contains(git2::Status::INDEX_NEW) {
            'A'
        } else if flags.contains(git2::Status::INDEX_RENAMED) {
            'R'
        } else if flags.contains(git2::Status::INDEX_MODIFIED) {
            'M'
        } else if flags.contains(git2::Status::INDEX_DELETED) {
            'D'
        } else if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            'T'
        } else {
            ' '
        };

        if index == ' ' && flags.contains(git2::Status::WT_NEW) {
            return Some(StatusCode::UNTRACKED);
        }

        let worktree = if flags.contains(git2::Status::WT_MODIFIED) {
            'M'
        } else if flags.contains(git2::Status::WT_DELETED) {
            'D'
        } else if flags.contains(git2::Status::WT_RENAMED) {
            'R'
        } else if flags.contains(git2::Status::WT_TYPECHANGE) {
            'T'
        } else {
            ' '
        };

        if index == ' ' && worktree == ' ' {
            None
        } else {
            Some(StatusCode::new(index, worktree))
        }
    }
}

impl StatusFetcher for LibGit2 {
    fn try_fetch_status(&self, root: &Path) -> Result<StatusMap> {
        let repo = Repository::open(root)?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);
        opts.renames_head_to_index(true);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut status = StatusMap::new();

        for entry in statuses.iter() {
            let Some(code) = Self::code_from_flags(entry.status()) else {
                continue;
            };

            // Renamed entries report the new name on the head-to-index delta
            let path = entry
                .head_to_index()
                .and_then(|delta| delta.new_file().path().map(Path::to_path_buf))
                .or_else(|| entry.path().map(PathBuf::from))
                .ok_or(OverlayError::InvalidUtf8Path)?;

            status.insert(root.join(path), code);
        }

        Ok(status)
    }
}

/// Which status backend the overlay uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBackend {
    #[default]
    Cli,
    Libgit2,
}

impl StatusBackend {
    /// Build the fetcher for this backend; `git_program` only applies to [`StatusBackend::Cli`]
    pub fn fetcher(&self, git_program: &str) -> Box<dyn StatusFetcher> {
        match self {
            StatusBackend::Cli => Box::new(GitCli::new(git_program)),
            StatusBackend::Libgit2 => Box::new(LibGit2),
        }
    }
}
