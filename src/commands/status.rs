use crate::commands::resolve_dir;
use crate::core::{
    config::OverlayConfig,
    display::DisplayMapping,
    error::{OverlayError, Result},
    git_status::StatusCode,
    locator::find_root,
    output::{print_info, print_section_header},
};
use std::path::{Path, PathBuf};

pub fn execute_status(path: Option<PathBuf>, config: &OverlayConfig) -> Result<()> {
    let dir = resolve_dir(path)?;
    let root = find_root(&dir).ok_or(OverlayError::NotInGitRepo)?;

    // Unlike the overlay, the command reports fetch failures
    let status = config.fetcher().try_fetch_status(&root)?;

    if status.is_empty() {
        print_info("Working tree clean");
        return Ok(());
    }

    let display = config.display_mapping();
    let mut entries: Vec<(&Path, StatusCode)> = status
        .iter()
        .map(|(path, code)| (path.strip_prefix(&root).unwrap_or(path), *code))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    print_section_header(&root.display().to_string());
    for (path, code) in entries {
        println!("{}", format_status_line(&display, code, path));
    }
    println!();

    Ok(())
}

/// `<code> <symbol> <path>`, colored by category; unmapped codes stay plain
pub fn format_status_line(display: &DisplayMapping, code: StatusCode, path: &Path) -> String {
    let code_text = code.to_string();
    let path_text = path.display().to_string();

    match display.resolve(code) {
        Some((category, symbol)) => format!(
            "  {} {} {}",
            display.paint(category, &code_text),
            display.paint(category, symbol),
            display.paint(category, &path_text)
        ),
        None => format!("  {code_text}   {path_text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mapped_line() {
        let line = format_status_line(
            &DisplayMapping::default(),
            StatusCode::new('A', 'M'),
            Path::new("src/new.rs"),
        );
        assert!(line.contains("AM"));
        assert!(line.contains('+'));
        assert!(line.contains("src/new.rs"));
    }

    #[test]
    fn test_format_unmapped_line() {
        let line = format_status_line(
            &DisplayMapping::default(),
            StatusCode::UNMERGED,
            Path::new("conflict.txt"),
        );
        assert_eq!(line, "  UU   conflict.txt");
    }
}
