//! Single-slot debounce scheduling for overlay renders.
//!
//! The host's event loop feeds [`HostEvent`]s in and polls the [`Scheduler`]
//! with the current time. At most one [`ScheduledRender`] is pending; every
//! new debounced trigger cancels it and schedules a fresh one, so a burst of
//! triggers yields a single render `delay` after the last one.
//!
//! # Event Classes
//! - **Debounced**: [`HostEvent::ListingChanged`], [`HostEvent::FileWritten`],
//!   [`HostEvent::FocusGained`]
//! - **Immediate render**: [`HostEvent::ListingEntered`]
//! - **Invalidate and render**: [`HostEvent::TerminalClosed`],
//!   [`HostEvent::RepositoryChanged`], [`HostEvent::ManualRefresh`]

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Longest accepted debounce delay; longer delays are clamped to it
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(60 * 60);

/// Signals the host editor forwards to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// A listing buffer was entered or opened
    ListingEntered,
    /// The listing's content changed (navigation, mutation)
    ListingChanged,
    /// A file was written from the editor
    FileWritten,
    /// The editor regained focus
    FocusGained,
    /// A terminal inside the editor closed; commands run there may have touched the repo
    TerminalClosed,
    /// Another git-aware component reported a repository change
    RepositoryChanged,
    /// The user asked for a refresh
    ManualRefresh,
}

/// What the overlay should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Debounce,
    RenderNow,
    InvalidateAndRender,
}

impl HostEvent {
    pub fn action(&self) -> EventAction {
        match self {
            HostEvent::ListingChanged | HostEvent::FileWritten | HostEvent::FocusGained => {
                EventAction::Debounce
            }
            HostEvent::ListingEntered => EventAction::RenderNow,
            HostEvent::TerminalClosed
            | HostEvent::RepositoryChanged
            | HostEvent::ManualRefresh => EventAction::InvalidateAndRender,
        }
    }
}

/// Handle of the pending render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRender {
    pub id: u64,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    delay: Duration,
    pending: Option<ScheduledRender>,
    next_id: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Scheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.min(MAX_DEBOUNCE),
            pending: None,
            next_id: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay; an already pending render keeps its deadline
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.min(MAX_DEBOUNCE);
    }

    /// Replace any pending render with one due `delay` after `now`
    pub fn schedule(&mut self, now: Instant) -> ScheduledRender {
        if let Some(previous) = self.pending {
            log::debug!("Replacing pending render #{}", previous.id);
        }

        self.next_id += 1;
        let handle = ScheduledRender {
            id: self.next_id,
            due: now.checked_add(self.delay).unwrap_or(now),
        };
        self.pending = Some(handle);
        handle
    }

    /// Cancel the pending render, returning it if there was one
    pub fn cancel(&mut self) -> Option<ScheduledRender> {
        self.pending.take()
    }

    /// Consume the pending render if it is due at `now`
    pub fn poll(&mut self, now: Instant) -> Option<ScheduledRender> {
        match self.pending {
            Some(handle) if now >= handle.due => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<ScheduledRender> {
        self.pending
    }

    /// When the host should poll next, if anything is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|handle| handle.due)
    }
}
