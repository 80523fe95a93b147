//! Prepared repository scenarios
//!
//! Each scenario leaves the working tree with a known set of porcelain
//! status codes so tests can assert on exact results.

#![allow(dead_code)]

use super::repository::*;
use git_overlay::core::error::Result;

/// Scenario: one path per status category.
///
/// | path                | code |
/// |---------------------|------|
/// | `modify.txt`        | ` M` |
/// | `delete.txt`        | ` D` |
/// | `renamed.txt`       | `R ` |
/// | `staged.txt`        | `AM` |
/// | `src/lib.rs`        | `M ` |
/// | `untracked.txt`     | `??` |
/// | `fresh/` (dir)      | `??` |
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(
        &repo.path,
        &["keep.txt", "modify.txt", "delete.txt", "old.txt", "src/lib.rs"],
    )?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["modify.txt"])?;
    remove_file(&repo.path, "delete.txt")?;
    git_mv(&repo.path, "old.txt", "renamed.txt")?;

    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "staged.txt", "staged\nthen changed\n")?;

    modify_test_files(&repo.path, &["src/lib.rs"])?;
    git_add(&repo.path, "src/lib.rs")?;

    create_file(&repo.path, "untracked.txt", "new\n")?;
    create_file(&repo.path, "fresh/inner.txt", "inner\n")?;

    Ok(repo)
}

/// Scenario: committed repository plus the given untracked files
pub fn create_untracked_only_repo(files: &[&str]) -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_test_files(&repo.path, files)?;
    Ok(repo)
}
