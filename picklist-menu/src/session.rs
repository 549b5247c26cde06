//! Picklist session
//!
//! One session per call: the accelerator counters and navigator are created
//! when the list opens and dropped when it closes.

use heapless::String;

use picklist_core::config::{Layout, PicklistConfig};
use picklist_core::nav::{Entry, FrameOutcome, Navigator, Picklist, Selection};
use picklist_core::traits::{FrameClock, PadSource};
use picklist_display::view::{draw_chrome, render_picklist, PicklistFrame};
use picklist_display::{DisplayError, Surface};

use crate::error::SessionError;

/// Maximum footer length in bytes
pub const MAX_FOOTER_LEN: usize = 40;

/// Menu front end over a pad, a display surface and a frame clock
pub struct Menu<P, S, C> {
    pub(crate) pad: P,
    pub(crate) surface: S,
    pub(crate) clock: C,
    config: PicklistConfig,
    /// Line shown at the bottom of every picklist
    footer: String<MAX_FOOTER_LEN>,
}

impl<P, S, C> Menu<P, S, C>
where
    P: PadSource,
    S: Surface,
    C: FrameClock,
{
    /// Create a menu with the given collaborators
    pub fn new(pad: P, surface: S, clock: C, config: PicklistConfig) -> Self {
        Self {
            pad,
            surface,
            clock,
            config,
            footer: String::new(),
        }
    }

    /// Set the footer line, truncated to [`MAX_FOOTER_LEN`] bytes
    pub fn set_footer(&mut self, text: &str) {
        self.footer.clear();
        for ch in text.chars() {
            if self.footer.push(ch).is_err() {
                break;
            }
        }
    }

    pub fn footer(&self) -> &str {
        self.footer.as_str()
    }

    pub fn config(&self) -> &PicklistConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (P, S, C) {
        (self.pad, self.surface, self.clock)
    }

    /// Let the user pick one of `entries`
    ///
    /// Runs until the primary button (confirm) or the secondary button
    /// (cancel) is freshly pressed. Viewport and font are read once here.
    pub async fn picklist<E: Entry>(
        &mut self,
        entries: &[E],
        caption: &str,
    ) -> Result<Selection, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::EmptyList);
        }

        let layout = Layout::new(
            self.surface.viewport(),
            self.surface.font(),
            &self.config.layout,
        )?;
        let mut session = Picklist::new(
            entries.len(),
            layout.visible_rows(),
            self.config.nav,
            self.config.repeat,
        );

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Picklist: {} entries, {} rows",
            entries.len(),
            layout.visible_rows()
        );

        let frame = PicklistFrame {
            caption,
            footer: (!self.footer.is_empty()).then_some(self.footer.as_str()),
            entries,
        };

        draw_chrome(&mut self.surface, &layout)?;
        redraw(&mut self.surface, &layout, &frame, session.navigator())?;

        loop {
            self.clock.next_frame().await;
            let pad = self.pad.poll();

            match session.frame(&pad) {
                FrameOutcome::Idle => {}
                FrameOutcome::Moved => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!(
                        "Selected {} (scroll {})",
                        session.navigator().selected(),
                        session.navigator().scroll_base()
                    );
                    redraw(&mut self.surface, &layout, &frame, session.navigator())?;
                }
                FrameOutcome::Finished(selection) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Picklist finished: {}", selection);
                    return Ok(selection);
                }
            }
        }
    }
}

fn redraw<S: Surface, E: Entry>(
    surface: &mut S,
    layout: &Layout,
    frame: &PicklistFrame<'_, E>,
    nav: &Navigator,
) -> Result<(), DisplayError> {
    render_picklist(surface, layout, frame, nav)?;
    surface.flush()
}
