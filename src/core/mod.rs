//! Core functionality for git-overlay.
//!
//! This module provides the building blocks for annotating a file-browser
//! listing with git status: repository discovery, status fetching, caching,
//! display mapping, debounce scheduling and the host-facing renderer.

pub mod cache;
pub mod clock;
pub mod config;
pub mod dirs;
pub mod display;
pub mod error;
pub mod fetcher;
pub mod git_status;
pub mod host;
pub mod locator;
pub mod output;
pub mod overlay;
pub mod renderer;
pub mod scheduler;

// === Error handling ===
pub use error::{OverlayError, Result};

// === Status codes ===
// Two-character porcelain codes and their fixed-priority display categories
pub use git_status::{HighlightCategory, StatusCode};

// === Repository discovery and status ===
pub use fetcher::{parse_porcelain, GitCli, LibGit2, StatusBackend, StatusFetcher, StatusMap};
pub use locator::find_root;

// === Caching and timing ===
pub use cache::{CacheEntry, StatusCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{EventAction, HostEvent, ScheduledRender, Scheduler};

// === Display ===
pub use display::{DisplayMapping, HighlightColors, Symbols};

// === Host integration ===
pub use host::{EntryKind, ListingEntry, ListingHost, MemoryHost};
pub use overlay::Overlay;
pub use renderer::render;

// === Configuration ===
pub use config::OverlayConfig;

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header};
