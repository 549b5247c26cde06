//! Board-agnostic core logic for the picklist menu
//!
//! This crate contains everything that does not depend on a particular
//! display or controller:
//!
//! - Pad button bitmasks and the typematic input repeater
//! - Navigator state machine (selection, scroll window, confirm/cancel)
//! - Layout geometry and tuning configuration
//! - Collaborator traits for pad polling and frame timing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod nav;
pub mod traits;

pub use config::{FontMetrics, Layout, LayoutError, PicklistConfig, Viewport};
pub use input::{Buttons, Direction, PadSnapshot, Repeater, Steps};
pub use nav::{Entry, FrameOutcome, Navigator, Picklist, Selection, State};
