//! Selection and scroll window over a fixed-size list
//!
//! The navigator keeps `selected` inside the list and `scroll_base` such
//! that the selection stays visible with a margin of `scroll_off` rows to
//! either edge whenever the list is long enough to allow it.

use core::ops::Range;

use super::events::Event;
use super::machine::{Selection, State};
use crate::config::NavConfig;
use crate::input::{Direction, Steps};

/// List navigator state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Navigator {
    /// Number of entries (N), fixed for the session
    len: usize,
    /// Rows that fit in the viewport, fixed for the session
    visible_rows: usize,
    config: NavConfig,
    selected: usize,
    scroll_base: usize,
    state: State,
}

impl Navigator {
    /// Create a navigator with the first entry selected
    ///
    /// `visible_rows` must be at least 1.
    pub fn new(len: usize, visible_rows: usize, config: NavConfig) -> Self {
        debug_assert!(visible_rows > 0, "viewport must show at least one row");

        Self {
            len,
            visible_rows: visible_rows.max(1),
            config,
            selected: 0,
            scroll_base: 0,
            state: State::Browsing,
        }
    }

    /// Apply one frame of direction steps
    ///
    /// Steps apply in the order up, down, left, right, each clamped to the
    /// list as it lands; the scroll window is recomputed once afterwards.
    /// Returns true if the selection or scroll position changed. Ignored
    /// once the session ended.
    pub fn step(&mut self, steps: Steps) -> bool {
        if self.state.is_terminal() || steps.is_empty() {
            return false;
        }

        let before = (self.selected, self.scroll_base);

        let page = self.config.page_jump as isize;
        for dir in steps.iter() {
            let delta = match dir {
                Direction::Up => -1,
                Direction::Down => 1,
                Direction::Left => -page,
                Direction::Right => page,
            };
            self.selected = self.clamped(delta);
        }
        self.rescroll();

        before != (self.selected, self.scroll_base)
    }

    /// Move the selection by `delta` entries, clamp, and rescroll
    ///
    /// Returns true if the selection or scroll position changed.
    pub fn move_by(&mut self, delta: isize) -> bool {
        if self.state.is_terminal() {
            return false;
        }

        let before = (self.selected, self.scroll_base);

        self.selected = self.clamped(delta);
        self.rescroll();

        before != (self.selected, self.scroll_base)
    }

    /// Selection moved by `delta`, kept inside [0, N-1]
    fn clamped(&self, delta: isize) -> usize {
        let last = self.len.saturating_sub(1) as isize;
        (self.selected as isize)
            .saturating_add(delta)
            .clamp(0, last) as usize
    }

    /// Handle an action button event
    pub fn handle(&mut self, event: Event) -> State {
        self.state = self.state.transition(event);
        self.state
    }

    /// Pull `scroll_base` towards the selection, keeping the margin
    fn rescroll(&mut self) {
        // A margin wider than the window could push the selection off screen
        let margin = self.config.scroll_off.min(self.visible_rows);
        let max_base = self.len.saturating_sub(self.visible_rows);

        while self.selected < self.scroll_base + margin && self.scroll_base > 0 {
            self.scroll_base -= 1;
        }

        while self.scroll_base + self.visible_rows < self.selected + margin
            && self.scroll_base < max_base
        {
            self.scroll_base += 1;
        }
    }

    /// Current session state
    pub fn state(&self) -> State {
        self.state
    }

    /// Result once the session has ended
    pub fn outcome(&self) -> Option<Selection> {
        match self.state {
            State::Browsing => None,
            State::Confirmed => Some(Selection::Confirmed(self.selected)),
            State::Cancelled => Some(Selection::Cancelled),
        }
    }

    /// Selected index, or -1 once cancelled
    pub fn selected(&self) -> i32 {
        match self.state {
            State::Cancelled => -1,
            _ => self.selected as i32,
        }
    }

    pub fn scroll_base(&self) -> usize {
        self.scroll_base
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of the entries on screen
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll_base + self.visible_rows).min(self.len);
        self.scroll_base.min(end)..end
    }

    /// Entries on screen, from the caller's list
    pub fn visible<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(entries.len());
        &entries[range.start.min(end)..end]
    }

    /// Row of the selection within the visible slice
    pub fn highlighted_row(&self) -> Option<usize> {
        if self.state == State::Cancelled {
            return None;
        }
        let range = self.visible_range();
        range
            .contains(&self.selected)
            .then(|| self.selected - range.start)
    }

    /// More entries exist above the window
    pub fn can_scroll_up(&self) -> bool {
        self.scroll_base > 0
    }

    /// More entries exist below the window
    pub fn can_scroll_down(&self) -> bool {
        self.scroll_base + self.visible_rows < self.len
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::input::Buttons;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scroll_window_invariants(
            len in 1usize..200,
            rows in 1usize..40,
            masks in proptest::collection::vec(0u16..16, 0..300),
        ) {
            let mut n = Navigator::new(len, rows, NavConfig::default());
            let max_base = len.saturating_sub(rows);

            for mask in masks {
                n.step(Steps::from_buttons(Buttons::from_bits(mask)));

                let sel = n.selected() as usize;
                let base = n.scroll_base();
                prop_assert!(sel < len);
                prop_assert!(base <= max_base);
                prop_assert!(base <= sel && sel < base + rows);
                if len <= rows {
                    prop_assert_eq!(base, 0);
                }
                prop_assert_eq!(n.can_scroll_up(), base > 0);
                prop_assert_eq!(n.can_scroll_down(), base + rows < len);
                prop_assert_eq!(n.highlighted_row(), Some(sel - base));
            }
        }

        #[test]
        fn selection_clamped_under_large_deltas(
            len in 1usize..100,
            deltas in proptest::collection::vec(-10_000isize..10_000, 1..50),
        ) {
            let mut n = Navigator::new(len, 5, NavConfig::default());
            for delta in deltas {
                n.move_by(delta);
                prop_assert!((0..len as i32).contains(&n.selected()));
            }
        }
    }
}
