//! Pad input handling
//!
//! Raw pad state comes in as button bitmasks once per frame. The repeater
//! turns held directions into discrete movement steps.

pub mod pad;
pub mod repeater;

pub use pad::{Buttons, Direction, PadSnapshot};
pub use repeater::{poll_direction, Repeater, Steps};
