pub mod config;
pub mod list;
pub mod root;
pub mod status;

pub use config::*;
pub use list::*;
pub use root::*;
pub use status::*;

use crate::core::error::{OverlayError, Result};
use std::path::PathBuf;

/// Absolute, canonical form of the directory a command targets (default: cwd)
pub fn resolve_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let dir = path.canonicalize()?;

    if !dir.is_dir() {
        return Err(OverlayError::not_a_directory(dir));
    }
    Ok(dir)
}
