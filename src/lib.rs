//! Git Overlay - git status indicators for file-browser listings.
//!
//! This library finds the repository enclosing a listed directory, reads its
//! status, caches it for a short time, and annotates each listed entry with
//! a highlight and a status symbol through a host-provided listing API.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Repository discovery and status fetching
//! - Time-bounded status caching
//! - Status code to highlight/symbol resolution
//! - Debounced rendering driven by host events
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use crate::core::{
    find_root,
    parse_porcelain,
    // Rendering
    render,
    CacheEntry,
    Clock,
    DisplayMapping,
    EntryKind,
    GitCli,
    HighlightCategory,
    HighlightColors,
    HostEvent,
    LibGit2,
    ListingEntry,
    ListingHost,
    ManualClock,
    MemoryHost,
    // Context object
    Overlay,
    OverlayConfig,
    // Error handling
    OverlayError,
    Result,
    Scheduler,
    StatusBackend,
    StatusCache,
    StatusCode,
    StatusFetcher,
    StatusMap,
    Symbols,
    SystemClock,
};
