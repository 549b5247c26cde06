//! Modal message dialog

use picklist_core::config::Rect;
use picklist_core::traits::{FrameClock, PadSource};
use picklist_display::Surface;

use crate::error::SessionError;
use crate::session::Menu;

/// Dialog window origin
const DIALOG_X: u16 = 24;
const DIALOG_Y: u16 = 40;
/// Viewport pixels not covered by the dialog window
const DIALOG_SHRINK_W: u16 = 40;
const DIALOG_SHRINK_H: u16 = 56;
/// Title and message offsets inside the window
const TITLE_OFFSET: (u16, u16) = (6, 4);
const MESSAGE_OFFSET: (u16, u16) = (14, 20);

impl<P, S, C> Menu<P, S, C>
where
    P: PadSource,
    S: Surface,
    C: FrameClock,
{
    /// Show `title` and `message` until any button is freshly pressed
    pub async fn error(&mut self, title: &str, message: &str) -> Result<(), SessionError> {
        let viewport = self.surface.viewport();
        let layout = &self.config().layout;
        let (title_palette, list_palette, fill) =
            (layout.title_palette, layout.list_palette, layout.window_fill);

        let window = Rect {
            x: DIALOG_X,
            y: DIALOG_Y,
            width: viewport.width.saturating_sub(DIALOG_SHRINK_W),
            height: viewport.height.saturating_sub(DIALOG_SHRINK_H),
        };

        self.surface.clear()?;
        self.surface.draw_window(window, fill)?;
        self.surface.draw_text(
            DIALOG_X + TITLE_OFFSET.0,
            DIALOG_Y + TITLE_OFFSET.1,
            title_palette,
            title,
        )?;
        self.surface.draw_text(
            DIALOG_X + MESSAGE_OFFSET.0,
            DIALOG_Y + MESSAGE_OFFSET.1,
            list_palette,
            message,
        )?;
        self.surface.flush()?;

        loop {
            self.clock.next_frame().await;
            if !self.pad.poll().pushed.is_empty() {
                #[cfg(feature = "defmt")]
                defmt::debug!("Dialog dismissed");
                return Ok(());
            }
        }
    }
}
