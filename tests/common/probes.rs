//! Status fetchers that record how often they are called

#![allow(dead_code)]

use git_overlay::core::error::Result;
use git_overlay::{parse_porcelain, StatusFetcher, StatusMap};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

/// Wraps another fetcher and counts its calls through a shared counter
pub struct CountingFetcher {
    inner: Box<dyn StatusFetcher>,
    calls: Rc<Cell<usize>>,
}

impl CountingFetcher {
    pub fn new(inner: Box<dyn StatusFetcher>) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let fetcher = Self {
            inner,
            calls: Rc::clone(&calls),
        };
        (fetcher, calls)
    }
}

impl StatusFetcher for CountingFetcher {
    fn try_fetch_status(&self, root: &Path) -> Result<StatusMap> {
        self.calls.set(self.calls.get() + 1);
        self.inner.try_fetch_status(root)
    }
}

/// Replays fixed porcelain output for any root
pub struct PorcelainFetcher(pub String);

impl StatusFetcher for PorcelainFetcher {
    fn try_fetch_status(&self, root: &Path) -> Result<StatusMap> {
        Ok(parse_porcelain(root, &self.0))
    }
}

/// Counting fetcher over fixed porcelain output
pub fn counting_porcelain(output: &str) -> (Box<dyn StatusFetcher>, Rc<Cell<usize>>) {
    let (fetcher, calls) = CountingFetcher::new(Box::new(PorcelainFetcher(output.to_string())));
    (Box::new(fetcher), calls)
}
