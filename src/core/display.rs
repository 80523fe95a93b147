//! Display mapping from status codes to highlight groups and symbols.
//!
//! This module is the single source of truth for how a [`StatusCode`] is
//! shown: which [`HighlightCategory`] it falls into, which glyph is drawn
//! next to the entry, and which color the category uses when the overlay
//! defines the highlight itself.
//!
//! # Public API
//! - [`Symbols`]: One glyph per category, partial JSON overrides merge over defaults
//! - [`HighlightColors`]: One `#rrggbb` color per category
//! - [`DisplayMapping`]: Immutable resolver built from the two tables
//!
//! # Color Scheme
//! - **Added**: Green
//! - **Modified**: Yellow
//! - **Renamed**: Blue
//! - **Deleted**: Red
//! - **Untracked**: Cyan

use crate::core::error::{OverlayError, Result};
use crate::core::git_status::{HighlightCategory, StatusCode};
use colored::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub added: String,
    pub modified: String,
    pub renamed: String,
    pub deleted: String,
    pub untracked: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            added: "+".to_string(),
            modified: "~".to_string(),
            renamed: "→".to_string(),
            deleted: "✗".to_string(),
            untracked: "?".to_string(),
        }
    }
}

impl Symbols {
    pub fn get(&self, category: HighlightCategory) -> &str {
        match category {
            HighlightCategory::Added => &self.added,
            HighlightCategory::Modified => &self.modified,
            HighlightCategory::Renamed => &self.renamed,
            HighlightCategory::Deleted => &self.deleted,
            HighlightCategory::Untracked => &self.untracked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightColors {
    pub added: String,
    pub modified: String,
    pub renamed: String,
    pub deleted: String,
    pub untracked: String,
}

impl Default for HighlightColors {
    fn default() -> Self {
        Self {
            added: "#5faf5f".to_string(),
            modified: "#d7af5f".to_string(),
            renamed: "#5f87d7".to_string(),
            deleted: "#d75f5f".to_string(),
            untracked: "#5fafaf".to_string(),
        }
    }
}

impl HighlightColors {
    pub fn get(&self, category: HighlightCategory) -> &str {
        match category {
            HighlightCategory::Added => &self.added,
            HighlightCategory::Modified => &self.modified,
            HighlightCategory::Renamed => &self.renamed,
            HighlightCategory::Deleted => &self.deleted,
            HighlightCategory::Untracked => &self.untracked,
        }
    }

    /// Check every entry is a valid `#rrggbb` color
    pub fn validate(&self) -> Result<()> {
        for category in HighlightCategory::ALL {
            parse_hex_color(self.get(category))?;
        }
        Ok(())
    }
}

/// Parse a `#rrggbb` string into its RGB components
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8)> {
    let hex = value
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| OverlayError::invalid_color(value))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| OverlayError::invalid_color(value))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Resolves status codes to (category, symbol) pairs.
///
/// Configured once at setup; replaced wholesale on reconfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayMapping {
    symbols: Symbols,
    colors: HighlightColors,
}

impl DisplayMapping {
    pub fn new(symbols: Symbols, colors: HighlightColors) -> Self {
        Self { symbols, colors }
    }

    /// Category and symbol for `code`, or `None` when the code has no mapping
    pub fn resolve(&self, code: StatusCode) -> Option<(HighlightCategory, &str)> {
        HighlightCategory::from_code(code).map(|category| (category, self.symbols.get(category)))
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn colors(&self) -> &HighlightColors {
        &self.colors
    }

    /// Apply the category color to `text` for terminal output
    pub fn paint(&self, category: HighlightCategory, text: &str) -> ColoredString {
        paint_hex(self.colors.get(category), text)
    }
}

/// Color `text` with a `#rrggbb` value; invalid colors leave the text plain
pub fn paint_hex(color: &str, text: &str) -> ColoredString {
    match parse_hex_color(color) {
        Ok((r, g, b)) => text.truecolor(r, g, b),
        Err(_) => text.normal(),
    }
}
