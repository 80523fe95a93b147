use crate::commands::resolve_dir;
use crate::core::{
    error::{OverlayError, Result},
    locator::find_root,
};
use std::path::PathBuf;

pub fn execute_root(path: Option<PathBuf>) -> Result<()> {
    let dir = resolve_dir(path)?;
    let root = find_root(&dir).ok_or(OverlayError::NotInGitRepo)?;

    println!("{}", root.display());
    Ok(())
}
