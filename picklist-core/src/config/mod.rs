//! Configuration type definitions
//!
//! Geometry is read once when a session starts; tuning values are plain
//! data with defaults matching the stock menu behavior.

pub mod layout;
pub mod tuning;

pub use layout::{FontMetrics, Layout, LayoutConfig, LayoutError, Rect, Viewport};
pub use tuning::{NavConfig, RepeatConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a picklist session needs besides its entries and collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PicklistConfig {
    pub layout: LayoutConfig,
    pub nav: NavConfig,
    pub repeat: RepeatConfig,
}
