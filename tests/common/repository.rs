//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories in temporary
//! directories and driving them into specific states with the git CLI.

#![allow(dead_code)]

use git_overlay::core::error::{OverlayError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs git with `args` inside `repo_path`, failing on a non-zero exit
pub fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(OverlayError::Io)?;

    if !output.status.success() {
        return Err(OverlayError::git_status_failed(
            output.status.code(),
            &output.stderr,
        ));
    }
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// The returned path is canonical, so it compares equal to paths the
/// overlay derives from it.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(OverlayError::Io)?;
    let repo_path = temp_dir.path().canonicalize().map_err(OverlayError::Io)?;

    run_git(&repo_path, &["init", "--quiet"])?;

    // Set git config to avoid prompts during tests
    run_git(&repo_path, &["config", "user.name", "Test User"])?;
    run_git(&repo_path, &["config", "user.email", "test@example.com"])?;
    run_git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file (and any missing parent directories) in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(OverlayError::Io)?;
    }
    fs::write(path, content).map_err(OverlayError::Io)?;
    Ok(())
}

/// Adds a file to the git index ("." for everything)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "--quiet", "-m", message])
}

/// Renames a tracked file through the index
pub fn git_mv(repo_path: &Path, from: &str, to: &str) -> Result<()> {
    run_git(repo_path, &["mv", from, to])
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename)).map_err(OverlayError::Io)?;
    Ok(())
}

/// Creates multiple test files with sequential content
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Modifies multiple test files with new content
pub fn modify_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("modified{}\nline 2\nnew line\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Creates a temporary directory with no repository above it, or `None`
/// when the system temp directory itself sits inside a repository.
pub fn setup_plain_dir() -> Result<Option<TempDir>> {
    let temp_dir = TempDir::new().map_err(OverlayError::Io)?;
    let path = temp_dir.path().canonicalize().map_err(OverlayError::Io)?;

    if git_overlay::find_root(&path).is_some() {
        return Ok(None);
    }
    Ok(Some(temp_dir))
}
