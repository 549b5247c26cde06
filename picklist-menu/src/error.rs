//! Session errors

use picklist_core::config::LayoutError;
use picklist_display::DisplayError;

/// Errors that end a menu session early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Drawing failed
    Display(DisplayError),
    /// Viewport or font cannot hold the list
    Layout(LayoutError),
    /// Picklist started with no entries
    EmptyList,
}

impl From<DisplayError> for SessionError {
    fn from(e: DisplayError) -> Self {
        SessionError::Display(e)
    }
}

impl From<LayoutError> for SessionError {
    fn from(e: LayoutError) -> Self {
        SessionError::Layout(e)
    }
}
