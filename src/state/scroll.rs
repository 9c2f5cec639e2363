//! Scroll-driven pagination trigger.

/// Items from the end at which the next page is requested.
pub const DEFAULT_LOOK_AHEAD: usize = 10;

/// Decides when a scrolled list is close enough to its end to fetch more.
///
/// After firing, the tracker waits until the item count grows past what it
/// saw at that point, so crossing the threshold repeatedly while a page is
/// in flight fires only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTracker {
    look_ahead: usize,
    previous_total: usize,
    waiting: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD)
    }
}

impl ScrollTracker {
    pub fn new(look_ahead: usize) -> Self {
        Self {
            look_ahead,
            previous_total: 0,
            waiting: true,
        }
    }

    pub fn look_ahead(&self) -> usize {
        self.look_ahead
    }

    /// Whether a next page has been requested and has not grown the list yet.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Forget all progress; the next growth from zero is treated as page one.
    pub fn reset(&mut self) {
        self.previous_total = 0;
        self.waiting = true;
    }

    /// A requested page completed with `total` items now held. Stop waiting
    /// even if the page added nothing, so the next scroll can fire again.
    pub fn resume(&mut self, total: usize) {
        self.previous_total = total;
        self.waiting = false;
    }

    /// Feed a scroll position. Returns `true` when the next page should load.
    ///
    /// `first_visible` is the index of the first visible row, `visible` the
    /// number of rows on screen and `total` the number of items held.
    pub fn on_scroll(&mut self, first_visible: usize, visible: usize, total: usize) -> bool {
        if total < self.previous_total {
            self.previous_total = total;
            self.waiting = total == 0;
        }

        if self.waiting && total > self.previous_total {
            self.waiting = false;
            self.previous_total = total;
        }

        if !self.waiting && total.saturating_sub(visible) <= first_visible + self.look_ahead {
            self.waiting = true;
            return true;
        }

        false
    }
}
