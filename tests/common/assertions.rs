//! Common assertion helpers for CLI output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the not-in-repository error
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks a status code is printed for a path
pub fn has_status_entry(code: &str, path: &str) -> impl Predicate<str> {
    predicates::str::contains(code).and(predicates::str::contains(path))
}

/// Creates a predicate that checks for the clean working tree message
pub fn working_tree_clean() -> impl Predicate<str> {
    predicates::str::contains("Working tree clean")
}
