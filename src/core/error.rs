//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`OverlayError`] which covers the few fallible edges of
//! git-overlay: configuration loading, the CLI, and the fallible variant of the
//! status fetch. The overlay operations themselves never surface errors; they
//! degrade to "no annotations shown".
//!
//! # Public API
//! - [`OverlayError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, OverlayError>`
//!
//! # Error Categories
//! - **Repository lookup**: No `.git` found above a path
//! - **Status fetch**: git subprocess failures, git2 library errors
//! - **Configuration**: Unreadable or malformed config files, bad colors
//! - **I/O**: Directory listing and generic file system errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-overlay
#[derive(Error, Debug)]
pub enum OverlayError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    // Status fetch errors
    #[error("Failed to run '{program}': {source}")]
    GitSpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("git status exited with {code}: {stderr}")]
    GitStatusFailed { code: String, stderr: String },

    // File operation errors
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid highlight color '{value}'. Use the form #rrggbb")]
    InvalidColor { value: String },

    #[error("Invalid {field} of {value}ms. The maximum is {max}ms")]
    InvalidDuration {
        field: &'static str,
        value: u64,
        max: u64,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using OverlayError
pub type Result<T> = std::result::Result<T, OverlayError>;

impl OverlayError {
    /// Create a spawn failure error for the given git program
    pub fn git_spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::GitSpawnFailed {
            program: program.into(),
            source,
        }
    }

    /// Create a git status failure error from an exit status and raw stderr
    pub fn git_status_failed(code: Option<i32>, stderr: &[u8]) -> Self {
        Self::GitStatusFailed {
            code: code.map_or_else(|| "signal".to_string(), |c| format!("code {c}")),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    pub fn invalid_duration(field: &'static str, value: u64, max: u64) -> Self {
        Self::InvalidDuration { field, value, max }
    }
}
