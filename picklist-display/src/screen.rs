//! Character-grid screen buffer
//!
//! A `Surface` for text-mode panels: pixel positions are snapped down to
//! font cells. The window layer is kept apart from the text layer, so
//! clearing text leaves the window in place.

use picklist_core::config::{FontMetrics, Rect, Viewport};

use crate::backend::{DisplayError, Surface};

/// Text grid of `COLS` x `ROWS` font cells
#[derive(Clone)]
pub struct Screen<const COLS: usize, const ROWS: usize> {
    cells: [[u8; COLS]; ROWS],
    font: FontMetrics,
    /// Window layer: last window drawn and its fill color
    window: Option<(Rect, u16)>,
    /// Whether the screen needs to be pushed out
    dirty: bool,
    flushes: u32,
}

impl<const COLS: usize, const ROWS: usize> Default for Screen<COLS, ROWS> {
    fn default() -> Self {
        Self::new(FontMetrics::default())
    }
}

impl<const COLS: usize, const ROWS: usize> Screen<COLS, ROWS> {
    /// Create a blank screen using `font` cell size for pixel mapping
    pub fn new(font: FontMetrics) -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            font,
            window: None,
            dirty: true,
            flushes: 0,
        }
    }

    /// Text of a row with trailing blanks removed
    pub fn line(&self, row: usize) -> Option<&str> {
        let cells = self.cells.get(row)?;
        let end = cells.iter().rposition(|c| *c != b' ').map_or(0, |i| i + 1);
        // Cells only ever hold ASCII
        core::str::from_utf8(&cells[..end]).ok()
    }

    /// Character at a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).map(|c| *c as char)
    }

    /// First cell where `text` starts, scanning rows top to bottom
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        (0..ROWS).find_map(|row| {
            self.line(row)
                .and_then(|line| line.find(text))
                .map(|col| (row, col))
        })
    }

    /// Window layer content
    pub fn window(&self) -> Option<(Rect, u16)> {
        self.window
    }

    /// Check if screen changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of flushes so far
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }
}

impl<const COLS: usize, const ROWS: usize> Surface for Screen<COLS, ROWS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, _palette: u8, text: &str) -> Result<(), DisplayError> {
        // No cell grid to snap to
        if self.font.width == 0 || self.font.height == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }

        let row = (y / self.font.height) as usize;
        let col = (x / self.font.width) as usize;
        if row >= ROWS || col >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        // Clip at the right edge
        for (cell, ch) in self.cells[row][col..].iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
        }
        self.dirty = true;
        Ok(())
    }

    fn draw_window(&mut self, rect: Rect, fill: u16) -> Result<(), DisplayError> {
        let viewport = self.viewport();
        if rect.x as u32 + rect.width as u32 > viewport.width as u32
            || rect.y as u32 + rect.height as u32 > viewport.height as u32
        {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.window = Some((rect, fill));
        self.dirty = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.dirty = false;
        self.flushes += 1;
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.font.width * COLS as u16,
            self.font.height * ROWS as u16,
        )
    }

    fn font(&self) -> FontMetrics {
        self.font
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize> defmt::Format for Screen<COLS, ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.line(row).unwrap_or(""));
        }
        defmt::write!(f, "]");
    }
}
