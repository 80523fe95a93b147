//! Interfaces the overlay consumes from, and draws into, a file-browser host.
//!
//! A host is whatever shows a directory listing one entry per line: an
//! editor buffer, a terminal listing, a test double. The overlay only needs
//! to ask what is on each line and to place highlights and trailing
//! virtual text, so both sides are folded into [`ListingHost`].
//!
//! # Public API
//! - [`ListingHost`]: Listing + annotation + highlight-definition interface
//! - [`ListingEntry`] / [`EntryKind`]: What a listing line shows
//! - [`MemoryHost`]: In-memory host recording every annotation

use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Link,
}

/// The file or directory displayed on one listing line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }
}

pub trait ListingHost {
    /// Directory the current listing shows, if the current buffer is a listing
    fn current_dir(&self) -> Option<PathBuf>;

    fn line_count(&self) -> usize;

    /// Entry displayed on `line` (0-based), if the line shows one
    fn entry_at(&self, line: usize) -> Option<ListingEntry>;

    /// Raw text of `line`, used to locate the entry name
    fn line_text(&self, line: usize) -> Option<String>;

    /// Remove every highlight and virtual text previously placed by the overlay
    fn clear_annotations(&mut self);

    /// Highlight the byte range `cols` of `line` with `group`
    fn add_highlight(&mut self, line: usize, cols: Range<usize>, group: &str);

    /// Append non-editable text at the end of `line`
    fn add_virtual_text(&mut self, line: usize, text: &str, group: &str);

    fn is_highlight_defined(&self, group: &str) -> bool;

    fn define_highlight(&mut self, group: &str, color: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub line: usize,
    pub cols: Range<usize>,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualText {
    pub line: usize,
    pub text: String,
    pub group: String,
}

/// A listing held in memory.
///
/// Lines are added with [`MemoryHost::push_entry`]; annotations drawn by the
/// overlay are kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    dir: Option<PathBuf>,
    lines: Vec<(String, Option<ListingEntry>)>,
    highlights: Vec<Highlight>,
    virtual_texts: Vec<VirtualText>,
    defined: HashMap<String, String>,
    clears: usize,
}

impl MemoryHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// A host whose current buffer is not a listing
    pub fn without_listing() -> Self {
        Self::default()
    }

    /// Point the listing at another directory, dropping its lines
    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = Some(dir.into());
        self.lines.clear();
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Append a line displaying `entry`; directories are shown with a trailing `/`
    pub fn push_entry(&mut self, entry: ListingEntry) {
        let text = match entry.kind {
            EntryKind::Directory => format!("{}/", entry.name),
            EntryKind::File | EntryKind::Link => entry.name.clone(),
        };
        self.lines.push((text, Some(entry)));
    }

    /// Append a line that shows no entry (headers, blank lines)
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.lines.push((text.into(), None));
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn virtual_texts(&self) -> &[VirtualText] {
        &self.virtual_texts
    }

    pub fn highlight_on(&self, line: usize) -> Option<&Highlight> {
        self.highlights.iter().find(|h| h.line == line)
    }

    pub fn virtual_text_on(&self, line: usize) -> Option<&VirtualText> {
        self.virtual_texts.iter().find(|v| v.line == line)
    }

    /// Color a highlight group was defined with
    pub fn highlight_color(&self, group: &str) -> Option<&str> {
        self.defined.get(group).map(String::as_str)
    }

    /// How many times annotations were cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl ListingHost for MemoryHost {
    fn current_dir(&self) -> Option<PathBuf> {
        self.dir.clone()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn entry_at(&self, line: usize) -> Option<ListingEntry> {
        self.lines.get(line).and_then(|(_, entry)| entry.clone())
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.lines.get(line).map(|(text, _)| text.clone())
    }

    fn clear_annotations(&mut self) {
        self.highlights.clear();
        self.virtual_texts.clear();
        self.clears += 1;
    }

    fn add_highlight(&mut self, line: usize, cols: Range<usize>, group: &str) {
        self.highlights.push(Highlight {
            line,
            cols,
            group: group.to_string(),
        });
    }

    fn add_virtual_text(&mut self, line: usize, text: &str, group: &str) {
        self.virtual_texts.push(VirtualText {
            line,
            text: text.to_string(),
            group: group.to_string(),
        });
    }

    fn is_highlight_defined(&self, group: &str) -> bool {
        self.defined.contains_key(group)
    }

    fn define_highlight(&mut self, group: &str, color: &str) {
        self.defined.insert(group.to_string(), color.to_string());
    }
}
