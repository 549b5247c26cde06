//! Events that end a picklist session

use crate::input::Buttons;

/// Action button events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Primary action button freshly pressed
    Confirm,
    /// Secondary action button freshly pressed
    Cancel,
}

impl Event {
    /// Action from this frame's edge-triggered buttons
    ///
    /// Confirm wins when both were pressed on the same frame.
    pub fn from_pushed(pushed: Buttons) -> Option<Self> {
        if pushed.contains(Buttons::CONFIRM) {
            Some(Event::Confirm)
        } else if pushed.contains(Buttons::CANCEL) {
            Some(Event::Cancel)
        } else {
            None
        }
    }
}
