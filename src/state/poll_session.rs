// ============================================================================
// POLL SESSION - Owned handle of the single status poll loop of a page
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct PollInner {
    active: Cell<bool>,
    ticks: Cell<u32>,
    last_progress: Cell<Option<u8>>,
}

/// Shared handle of the poll loop. Clones observe the same session.
#[derive(Clone, Debug)]
pub struct PollSession {
    inner: Rc<PollInner>,
}

impl PollSession {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(PollInner {
                active: Cell::new(true),
                ticks: Cell::new(0),
                last_progress: Cell::new(None),
            }),
        }
    }

    /// Stops the loop. Returns `true` only for the call that actually stopped it.
    pub fn stop(&self) -> bool {
        self.inner.active.replace(false)
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    pub fn record_tick(&self) -> u32 {
        let tick = self.inner.ticks.get().saturating_add(1);
        self.inner.ticks.set(tick);
        tick
    }

    pub fn ticks(&self) -> u32 {
        self.inner.ticks.get()
    }

    pub fn record_progress(&self, percent: u8) {
        self.inner.last_progress.set(Some(percent));
    }

    pub fn last_progress(&self) -> Option<u8> {
        self.inner.last_progress.get()
    }
}

impl Default for PollSession {
    fn default() -> Self {
        Self::new()
    }
}
