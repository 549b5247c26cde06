//! Pad polling

use crate::input::PadSnapshot;

/// Source of raw pad state
pub trait PadSource {
    /// Read the pad once for the current frame
    ///
    /// `held` reports the buttons currently down; `pushed` reports the ones
    /// that went down since the previous call.
    fn poll(&mut self) -> PadSnapshot;
}
