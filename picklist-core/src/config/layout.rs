//! Screen layout for the picklist
//!
//! The list is drawn inside a framed window: a caption line at the top, a
//! footer line at the bottom, a cursor column and a text column. Everything
//! is derived once from the viewport and font cell size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Font cell size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    pub width: u16,
    pub height: u16,
}

impl FontMetrics {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for FontMetrics {
    /// 8x8 system font
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// Pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Layout errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Viewport cannot fit a single list row or text column
    ViewportTooSmall,
    /// Font cell has zero width or height
    FontTooSmall,
}

/// Fixed margins and palette of the picklist frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Y of the first list row
    pub list_top: u16,
    /// Pixels reserved below the list for the footer
    pub list_bottom_margin: u16,
    /// Horizontal pixels not available to entry text
    pub horizontal_chrome: u16,
    /// Inset of the framed window from the viewport edges
    pub window_inset: u16,
    /// Caption position
    pub caption_x: u16,
    pub caption_y: u16,
    /// Footer x; footer y is `height - footer_rise`
    pub footer_x: u16,
    pub footer_rise: u16,
    /// X of the selection cursor glyph
    pub cursor_x: u16,
    /// X of entry text
    pub text_x: u16,
    /// Scroll arrows sit this far above their row
    pub arrow_rise: u16,
    /// Palette index for caption and footer
    pub title_palette: u8,
    /// Palette index for list rows, cursor and arrows
    pub list_palette: u8,
    /// Window fill color (RGB555 with the opaque bit set)
    pub window_fill: u16,
}

/// Pack 5-bit channels into RGB555 with the opaque bit set
pub const fn rgb555(r: u16, g: u16, b: u16) -> u16 {
    0x8000 | ((b & 0x1f) << 10) | ((g & 0x1f) << 5) | (r & 0x1f)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list_top: 32,
            list_bottom_margin: 32,
            horizontal_chrome: 64,
            window_inset: 8,
            caption_x: 14,
            caption_y: 12,
            footer_x: 16,
            footer_rise: 8,
            cursor_x: 16,
            text_x: 32,
            arrow_rise: 4,
            title_palette: 0x0f,
            list_palette: 0x10,
            window_fill: rgb555(26, 26, 25),
        }
    }
}

/// Resolved layout for one viewport and font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    viewport: Viewport,
    font: FontMetrics,
    config: LayoutConfig,
    visible_rows: usize,
    text_cols: usize,
}

impl Layout {
    /// Derive list rows and text columns from the viewport and font
    pub fn new(
        viewport: Viewport,
        font: FontMetrics,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if font.width == 0 || font.height == 0 {
            return Err(LayoutError::FontTooSmall);
        }

        let list_height = viewport
            .height
            .checked_sub(config.list_top)
            .and_then(|h| h.checked_sub(config.list_bottom_margin))
            .ok_or(LayoutError::ViewportTooSmall)?;
        let text_width = viewport
            .width
            .checked_sub(config.horizontal_chrome)
            .ok_or(LayoutError::ViewportTooSmall)?;

        let visible_rows = (list_height / font.height) as usize;
        let text_cols = (text_width / font.width) as usize;

        if visible_rows == 0 || text_cols == 0 {
            return Err(LayoutError::ViewportTooSmall);
        }

        Ok(Self {
            viewport,
            font,
            config: *config,
            visible_rows,
            text_cols,
        })
    }

    /// Number of list rows that fit on screen
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Maximum entry name length in characters
    pub fn text_cols(&self) -> usize {
        self.text_cols
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn font(&self) -> FontMetrics {
        self.font
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Framed window behind the list
    pub fn window(&self) -> Rect {
        let inset = self.config.window_inset;
        Rect {
            x: inset,
            y: inset,
            width: self.viewport.width.saturating_sub(inset * 2),
            height: self.viewport.height.saturating_sub(inset * 2),
        }
    }

    /// Y of list row `row` (0 = first visible row)
    pub fn row_y(&self, row: usize) -> u16 {
        self.config.list_top + self.font.height * row as u16
    }

    pub fn caption_pos(&self) -> (u16, u16) {
        (self.config.caption_x, self.config.caption_y)
    }

    pub fn footer_pos(&self) -> (u16, u16) {
        (
            self.config.footer_x,
            self.viewport.height.saturating_sub(self.config.footer_rise),
        )
    }

    /// Scroll arrow x, three quarters across the viewport
    pub fn arrow_x(&self) -> u16 {
        (self.viewport.width as u32 * 3 / 4) as u16
    }

    /// Up arrow y, just above the first row
    pub fn up_arrow_y(&self) -> u16 {
        self.config.list_top.saturating_sub(self.config.arrow_rise)
    }

    /// Down arrow y, just above the row after the last one drawn
    pub fn down_arrow_y(&self, rows_drawn: usize) -> u16 {
        self.row_y(rows_drawn).saturating_sub(self.config.arrow_rise)
    }
}
