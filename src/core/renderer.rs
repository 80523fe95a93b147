//! Draws status annotations over a host listing.
//!
//! Every render starts from a clean slate: line numbers and entries change
//! between listings, so previous annotations are always cleared before any
//! new ones are placed.

use crate::core::cache::StatusCache;
use crate::core::display::DisplayMapping;
use crate::core::fetcher::StatusFetcher;
use crate::core::host::ListingHost;
use crate::core::locator::find_root;
use std::time::Instant;

/// Annotate the host's current listing; returns how many entries were annotated.
///
/// Nothing is fetched when the listing is outside any repository.
pub fn render<H: ListingHost + ?Sized>(
    host: &mut H,
    cache: &mut StatusCache,
    display: &DisplayMapping,
    fetcher: &dyn StatusFetcher,
    now: Instant,
) -> usize {
    host.clear_annotations();

    let Some(dir) = host.current_dir() else {
        return 0;
    };
    let Some(root) = find_root(&dir) else {
        return 0;
    };

    let status = cache.get_status(&root, now, fetcher);
    if status.is_empty() {
        return 0;
    }

    let mut annotated = 0;
    for line in 0..host.line_count() {
        let Some(entry) = host.entry_at(line) else {
            continue;
        };
        if entry.name.is_empty() {
            continue;
        }

        let Some(code) = status.get(&dir.join(&entry.name)) else {
            continue;
        };
        let Some((category, symbol)) = display.resolve(*code) else {
            continue;
        };
        let group = category.group_name();

        if let Some(start) = host
            .line_text(line)
            .and_then(|text| text.find(&entry.name))
        {
            host.add_highlight(line, start..start + entry.name.len(), group);
        }
        host.add_virtual_text(line, symbol, group);
        annotated += 1;
    }

    log::debug!("Annotated {annotated} entries in {}", dir.display());
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::core::fetcher::{parse_porcelain, StatusMap};
    use crate::core::host::{ListingEntry, MemoryHost};
    use std::cell::Cell;
    use std::path::Path;
    use tempfile::TempDir;

    /// Fetcher replaying fixed porcelain output
    struct FixedFetcher {
        output: &'static str,
        calls: Cell<usize>,
    }

    impl FixedFetcher {
        fn new(output: &'static str) -> Self {
            Self {
                output,
                calls: Cell::new(0),
            }
        }
    }

    impl StatusFetcher for FixedFetcher {
        fn try_fetch_status(&self, root: &Path) -> Result<StatusMap> {
            self.calls.set(self.calls.get() + 1);
            Ok(parse_porcelain(root, self.output))
        }
    }

    fn fake_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".git")).unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        temp
    }

    #[test]
    fn test_annotates_matching_entries() {
        let repo = fake_repo();
        let fetcher = FixedFetcher::new("AM src/new.rs\n M src/lib.rs\n");
        let mut host = MemoryHost::new(repo.path().join("src"));
        host.push_text("../");
        host.push_entry(ListingEntry::file("lib.rs"));
        host.push_entry(ListingEntry::file("new.rs"));
        host.push_entry(ListingEntry::file("clean.rs"));

        let count = render(
            &mut host,
            &mut StatusCache::default(),
            &DisplayMapping::default(),
            &fetcher,
            Instant::now(),
        );

        assert_eq!(count, 2);
        let modified = host.highlight_on(1).unwrap();
        assert_eq!(modified.cols, 0..6);
        assert_eq!(modified.group, "GitOverlayModified");
        assert_eq!(host.virtual_text_on(1).unwrap().text, "~");
        assert_eq!(host.virtual_text_on(2).unwrap().group, "GitOverlayAdded");
        assert!(host.virtual_text_on(3).is_none());
    }

    #[test]
    fn test_untracked_directory_entry() {
        let repo = fake_repo();
        let fetcher = FixedFetcher::new("?? src/\n");
        let mut host = MemoryHost::new(repo.path());
        host.push_entry(ListingEntry::directory("src"));

        render(
            &mut host,
            &mut StatusCache::default(),
            &DisplayMapping::default(),
            &fetcher,
            Instant::now(),
        );

        assert_eq!(host.highlight_on(0).unwrap().cols, 0..3);
        assert_eq!(host.virtual_text_on(0).unwrap().text, "?");
    }

    #[test]
    fn test_previous_annotations_are_cleared() {
        let repo = fake_repo();
        let mut host = MemoryHost::new(repo.path());
        host.push_entry(ListingEntry::file("a.txt"));
        host.add_virtual_text(7, "stale", "Stale");

        let fetcher = FixedFetcher::new("");
        render(
            &mut host,
            &mut StatusCache::default(),
            &DisplayMapping::default(),
            &fetcher,
            Instant::now(),
        );

        assert_eq!(host.clear_count(), 1);
        assert!(host.virtual_texts().is_empty());
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn test_no_listing_skips_fetch() {
        let fetcher = FixedFetcher::new("M  a.txt\n");
        let mut host = MemoryHost::without_listing();

        let count = render(
            &mut host,
            &mut StatusCache::default(),
            &DisplayMapping::default(),
            &fetcher,
            Instant::now(),
        );

        assert_eq!(count, 0);
        assert_eq!(host.clear_count(), 1);
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn test_unmapped_codes_are_not_drawn() {
        let repo = fake_repo();
        let fetcher = FixedFetcher::new("UU conflict.txt\n");
        let mut host = MemoryHost::new(repo.path());
        host.push_entry(ListingEntry::file("conflict.txt"));

        let count = render(
            &mut host,
            &mut StatusCache::default(),
            &DisplayMapping::default(),
            &fetcher,
            Instant::now(),
        );

        assert_eq!(count, 0);
        assert!(host.highlights().is_empty());
    }
}
