//! Navigation and input repeat tuning

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frame-counted typematic schedule for a held direction
///
/// All values are in frames (one per vertical sync).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepeatConfig {
    /// Held frames after the first step during which nothing repeats
    pub dead_zone: u32,
    /// Frames past the dead zone before the fast phase starts
    pub fast_after: u32,
    /// Step period during the slow phase
    pub slow_period: u32,
    /// Step period during the fast phase
    pub fast_period: u32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            dead_zone: 30,
            fast_after: 32,
            slow_period: 4,
            fast_period: 2,
        }
    }
}

impl RepeatConfig {
    /// Whether a direction held for `held_frames` previous frames steps now
    ///
    /// `held_frames` is 0 on the frame the button goes down.
    pub fn fires_at(&self, held_frames: u32) -> bool {
        if held_frames == 0 {
            return true;
        }

        let Some(w) = held_frames.checked_sub(self.dead_zone) else {
            return false;
        };

        if w == 0 {
            return false;
        }

        if w > self.fast_after && every(w, self.fast_period) {
            return true;
        }

        every(w, self.slow_period)
    }
}

/// A zero period never fires
fn every(frames: u32, period: u32) -> bool {
    period != 0 && frames % period == 0
}

/// List movement tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavConfig {
    /// Minimum rows kept between the selection and a visible edge
    pub scroll_off: usize,
    /// Entries skipped by one left/right step
    pub page_jump: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_off: 3,
            page_jump: 20,
        }
    }
}
