//! Shared test utilities for git-overlay
//!
//! This module provides helpers for integration tests: real repositories in
//! temporary directories, prepared status scenarios, and probes that count
//! status fetches.

pub mod assertions;
pub mod fixtures;
pub mod probes;
pub mod repository;
