//! The overlay context tying cache, display mapping, scheduler and host together.
//!
//! An [`Overlay`] owns all mutable overlay state. The embedding application
//! creates one, forwards host events to [`Overlay::handle_event`], and calls
//! [`Overlay::tick`] whenever [`Overlay::next_deadline`] passes.
//!
//! # Example
//! ```no_run
//! use git_overlay::core::{HostEvent, MemoryHost, Overlay, OverlayConfig};
//!
//! let mut host = MemoryHost::new("/path/to/project");
//! let mut overlay = Overlay::setup(OverlayConfig::default(), &mut host);
//!
//! overlay.handle_event(HostEvent::FileWritten, &mut host);
//! // ...later, from the event loop
//! overlay.tick(&mut host);
//! ```

use crate::core::cache::StatusCache;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::OverlayConfig;
use crate::core::display::DisplayMapping;
use crate::core::fetcher::StatusFetcher;
use crate::core::git_status::HighlightCategory;
use crate::core::host::ListingHost;
use crate::core::renderer;
use crate::core::scheduler::{EventAction, HostEvent, Scheduler};
use std::collections::HashSet;
use std::time::Instant;

pub struct Overlay {
    config: OverlayConfig,
    display: DisplayMapping,
    cache: StatusCache,
    scheduler: Scheduler,
    fetcher: Box<dyn StatusFetcher>,
    clock: Box<dyn Clock>,
    // Groups this overlay defined itself and may redefine on reconfigure
    owned_groups: HashSet<&'static str>,
}

impl Overlay {
    /// Build an overlay using the config's status backend and the system clock
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            display: config.display_mapping(),
            cache: StatusCache::new(config.ttl()),
            scheduler: Scheduler::new(config.debounce()),
            fetcher: config.fetcher(),
            clock: Box::new(SystemClock),
            owned_groups: HashSet::new(),
            config,
        }
    }

    /// Build an overlay and define its highlight groups on `host`
    pub fn setup<H: ListingHost + ?Sized>(config: OverlayConfig, host: &mut H) -> Self {
        let mut overlay = Self::new(config);
        overlay.apply_highlights(host);
        overlay
    }

    pub fn with_fetcher(mut self, fetcher: Box<dyn StatusFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Define highlight groups the host does not already provide.
    ///
    /// Groups already defined by the host are left alone; groups defined
    /// by this overlay are updated to the current colors.
    pub fn apply_highlights<H: ListingHost + ?Sized>(&mut self, host: &mut H) {
        for category in HighlightCategory::ALL {
            let group = category.group_name();
            if host.is_highlight_defined(group) && !self.owned_groups.contains(group) {
                log::debug!("Keeping host definition of {group}");
                continue;
            }
            host.define_highlight(group, self.display.colors().get(category));
            self.owned_groups.insert(group);
        }
    }

    /// Replace the configuration.
    ///
    /// Switching the status backend drops cached snapshots and replaces the
    /// fetcher; timing changes apply to the next read or schedule.
    pub fn reconfigure<H: ListingHost + ?Sized>(&mut self, config: OverlayConfig, host: &mut H) {
        if config.backend != self.config.backend || config.git_program != self.config.git_program
        {
            self.fetcher = config.fetcher();
            self.cache.invalidate_all();
        }

        self.cache.set_ttl(config.ttl());
        self.scheduler.set_delay(config.debounce());
        self.display = config.display_mapping();
        self.config = config;
        self.apply_highlights(host);
    }

    /// React to a host event; returns whether a render happened immediately
    pub fn handle_event<H: ListingHost + ?Sized>(&mut self, event: HostEvent, host: &mut H) -> bool {
        log::debug!("Host event {event:?}");

        match event.action() {
            EventAction::Debounce => {
                let now = self.clock.now();
                self.scheduler.schedule(now);
                false
            }
            EventAction::RenderNow => {
                self.scheduler.cancel();
                self.render(host);
                true
            }
            EventAction::InvalidateAndRender => {
                self.scheduler.cancel();
                self.cache.invalidate_all();
                self.render(host);
                true
            }
        }
    }

    /// Run the pending debounced render if it is due; returns whether it ran
    pub fn tick<H: ListingHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let now = self.clock.now();
        match self.scheduler.poll(now) {
            Some(handle) => {
                log::debug!("Debounced render #{} fired", handle.id);
                self.render(host);
                true
            }
            None => false,
        }
    }

    /// Annotate the host's current listing now
    pub fn render<H: ListingHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let now = self.clock.now();
        renderer::render(
            host,
            &mut self.cache,
            &self.display,
            self.fetcher.as_ref(),
            now,
        )
    }

    /// Drop all cached status and re-render immediately
    pub fn refresh<H: ListingHost + ?Sized>(&mut self, host: &mut H) -> usize {
        self.scheduler.cancel();
        self.cache.invalidate_all();
        self.render(host)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn display(&self) -> &DisplayMapping {
        &self.display
    }

    pub fn cache(&self) -> &StatusCache {
        &self.cache
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::MemoryHost;

    #[test]
    fn test_setup_defines_missing_groups_only() {
        let mut host = MemoryHost::without_listing();
        host.define_highlight("GitOverlayAdded", "#123456");

        let _overlay = Overlay::setup(OverlayConfig::default(), &mut host);

        assert_eq!(host.highlight_color("GitOverlayAdded"), Some("#123456"));
        assert_eq!(host.highlight_color("GitOverlayModified"), Some("#d7af5f"));
        assert_eq!(host.highlight_color("GitOverlayUntracked"), Some("#5fafaf"));
    }

    #[test]
    fn test_reconfigure_updates_owned_groups() {
        let mut host = MemoryHost::without_listing();
        host.define_highlight("GitOverlayAdded", "#123456");
        let mut overlay = Overlay::setup(OverlayConfig::default(), &mut host);

        let mut config = OverlayConfig::default();
        config.highlights.added = "#00ff00".to_string();
        config.highlights.deleted = "#ff0000".to_string();
        config.ttl_ms = 50;
        config.debounce_ms = 10;
        overlay.reconfigure(config, &mut host);

        assert_eq!(host.highlight_color("GitOverlayAdded"), Some("#123456"));
        assert_eq!(host.highlight_color("GitOverlayDeleted"), Some("#ff0000"));
        assert_eq!(overlay.cache().ttl().as_millis(), 50);
        assert_eq!(overlay.scheduler().delay().as_millis(), 10);
    }
}
