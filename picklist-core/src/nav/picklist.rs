//! One picklist session: repeater and navigator driven frame by frame

use super::events::Event;
use super::machine::Selection;
use super::navigator::Navigator;
use crate::config::{NavConfig, RepeatConfig};
use crate::input::{PadSnapshot, Repeater};

/// What a frame did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// Nothing visible changed
    Idle,
    /// Selection or scroll position changed; redraw
    Moved,
    /// Session ended with this result
    Finished(Selection),
}

/// Frame-synchronous picklist state
///
/// Owns the accelerator counters and the navigator for exactly one session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Picklist {
    repeater: Repeater,
    navigator: Navigator,
}

impl Picklist {
    /// Start a session over `len` entries with `visible_rows` on screen
    pub fn new(len: usize, visible_rows: usize, nav: NavConfig, repeat: RepeatConfig) -> Self {
        Self {
            repeater: Repeater::new(repeat),
            navigator: Navigator::new(len, visible_rows, nav),
        }
    }

    /// Process one frame of pad input
    ///
    /// Repeat counters advance every frame. A fresh confirm or cancel ends
    /// the session before any movement from the same frame is applied.
    /// Once finished, every later frame reports the same result.
    pub fn frame(&mut self, pad: &PadSnapshot) -> FrameOutcome {
        if let Some(selection) = self.navigator.outcome() {
            return FrameOutcome::Finished(selection);
        }

        let steps = self.repeater.poll(pad.held);

        if let Some(event) = Event::from_pushed(pad.pushed) {
            self.navigator.handle(event);
            if let Some(selection) = self.navigator.outcome() {
                return FrameOutcome::Finished(selection);
            }
        }

        if self.navigator.step(steps) {
            FrameOutcome::Moved
        } else {
            FrameOutcome::Idle
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn repeater(&self) -> &Repeater {
        &self.repeater
    }
}
