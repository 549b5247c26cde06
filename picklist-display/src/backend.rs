//! Display backend trait
//!
//! Defines the rendering capability the menu draws through.

use picklist_core::config::{FontMetrics, Rect, Viewport};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Pixel-addressed text surface
///
/// Coordinates are in pixels; text is drawn with the surface's active font
/// and its top-left corner at `(x, y)`.
pub trait Surface {
    /// Clear the text layer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a pixel position using a palette index
    fn draw_text(&mut self, x: u16, y: u16, palette: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw a framed, filled window
    fn draw_window(&mut self, rect: Rect, fill: u16) -> Result<(), DisplayError>;

    /// Push buffered content to the hardware
    ///
    /// Surfaces that draw straight to video memory need not override this.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Viewport size in pixels
    fn viewport(&self) -> Viewport;

    /// Active font cell size
    fn font(&self) -> FontMetrics;
}
