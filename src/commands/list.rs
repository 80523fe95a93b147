use crate::commands::resolve_dir;
use crate::core::{
    config::OverlayConfig,
    display::paint_hex,
    error::Result,
    host::{EntryKind, ListingEntry, ListingHost, MemoryHost},
    output::{muted, print_section_header},
    overlay::Overlay,
    scheduler::HostEvent,
};
use std::path::{Path, PathBuf};

pub fn execute_list(path: Option<PathBuf>, config: &OverlayConfig) -> Result<()> {
    let dir = resolve_dir(path)?;
    let mut host = load_listing(&dir)?;

    let mut overlay = Overlay::setup(config.clone(), &mut host);
    overlay.handle_event(HostEvent::ListingEntered, &mut host);

    print_section_header(&dir.display().to_string());
    for line in format_listing(&host) {
        println!("  {line}");
    }
    println!();

    Ok(())
}

/// Read `dir` into a listing: directories first, then files, each sorted by name.
/// The `.git` entry is hidden.
pub fn load_listing(dir: &Path) -> Result<MemoryHost> {
    let mut entries = Vec::new();

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name == ".git" {
            continue;
        }

        let file_type = dir_entry.file_type()?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Link
        } else {
            EntryKind::File
        };
        entries.push(ListingEntry::new(name, kind));
    }

    entries.sort_by(|a, b| {
        (a.kind != EntryKind::Directory)
            .cmp(&(b.kind != EntryKind::Directory))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut host = MemoryHost::new(dir);
    for entry in entries {
        host.push_entry(entry);
    }
    Ok(host)
}

/// Render every listing line with its highlight and trailing symbol applied
pub fn format_listing(host: &MemoryHost) -> Vec<String> {
    (0..host.line_count())
        .map(|line| {
            let text = host.line_text(line).unwrap_or_default();
            let color_of = |group: &str| host.highlight_color(group).unwrap_or_default();

            let mut rendered = match host.highlight_on(line) {
                Some(hl) if text.get(hl.cols.clone()).is_some() => format!(
                    "{}{}{}",
                    &text[..hl.cols.start],
                    paint_hex(color_of(&hl.group), &text[hl.cols.clone()]),
                    &text[hl.cols.end..]
                ),
                _ => text.clone(),
            };

            if let Some(virtual_text) = host.virtual_text_on(line) {
                rendered.push_str(&format!(
                    "  {}",
                    paint_hex(color_of(&virtual_text.group), &virtual_text.text)
                ));
            } else if host.entry_at(line).is_some_and(|e| e.kind == EntryKind::Link) {
                rendered.push_str(&format!("  {}", muted("@")));
            }

            rendered
        })
        .collect()
}
