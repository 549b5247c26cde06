//! Picklist rendering
//!
//! Draws one navigator frame: caption, optional footer, the visible entries
//! with a `>` cursor beside the selection, and `^`/`v` arrows when more
//! entries exist off screen.

use picklist_core::config::Layout;
use picklist_core::nav::{Entry, Navigator};

use crate::backend::{DisplayError, Surface};

const CURSOR: &str = ">";
const ARROW_UP: &str = "^";
const ARROW_DOWN: &str = "v";

/// Static content of a picklist screen
#[derive(Debug, Clone, Copy)]
pub struct PicklistFrame<'a, E> {
    pub caption: &'a str,
    pub footer: Option<&'a str>,
    pub entries: &'a [E],
}

/// Cut `text` to at most `cols` characters
pub fn truncate(text: &str, cols: usize) -> &str {
    match text.char_indices().nth(cols) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Draw the window behind the list
///
/// The window sits on its own layer, so this is done once per session.
pub fn draw_chrome<S: Surface>(surface: &mut S, layout: &Layout) -> Result<(), DisplayError> {
    surface.draw_window(layout.window(), layout.config().window_fill)
}

/// Redraw the text layer for the navigator's current state
pub fn render_picklist<S, E>(
    surface: &mut S,
    layout: &Layout,
    frame: &PicklistFrame<'_, E>,
    nav: &Navigator,
) -> Result<(), DisplayError>
where
    S: Surface,
    E: Entry,
{
    let cfg = layout.config();

    surface.clear()?;

    let (x, y) = layout.caption_pos();
    surface.draw_text(x, y, cfg.title_palette, frame.caption)?;

    if let Some(footer) = frame.footer {
        let (x, y) = layout.footer_pos();
        surface.draw_text(x, y, cfg.title_palette, footer)?;
    }

    let visible = nav.visible(frame.entries);
    let highlighted = nav.highlighted_row();

    for (row, entry) in visible.iter().enumerate() {
        let y = layout.row_y(row);
        if highlighted == Some(row) {
            surface.draw_text(cfg.cursor_x, y, cfg.list_palette, CURSOR)?;
        }
        let name = truncate(entry.name(), layout.text_cols());
        surface.draw_text(cfg.text_x, y, cfg.list_palette, name)?;
    }

    if nav.can_scroll_up() {
        surface.draw_text(
            layout.arrow_x(),
            layout.up_arrow_y(),
            cfg.list_palette,
            ARROW_UP,
        )?;
    }
    if nav.can_scroll_down() {
        surface.draw_text(
            layout.arrow_x(),
            layout.down_arrow_y(visible.len()),
            cfg.list_palette,
            ARROW_DOWN,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use picklist_core::config::{LayoutConfig, NavConfig};

    type TestScreen = Screen<40, 28>;

    const NAMES: [&str; 30] = [
        "a00", "a01", "a02", "a03", "a04", "a05", "a06", "a07", "a08", "a09", "a10", "a11",
        "a12", "a13", "a14", "a15", "a16", "a17", "a18", "a19", "a20", "a21", "a22", "a23",
        "a24", "a25", "a26", "a27", "a28", "a29",
    ];

    fn setup() -> (TestScreen, Layout) {
        let screen = TestScreen::default();
        let layout = Layout::new(screen.viewport(), screen.font(), &LayoutConfig::default())
            .unwrap();
        (screen, layout)
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hi", 3), "hi");
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_first_frame() {
        let (mut screen, layout) = setup();
        let nav = Navigator::new(NAMES.len(), layout.visible_rows(), NavConfig::default());
        let frame = PicklistFrame {
            caption: "Select image",
            footer: Some("MNU 1.0"),
            entries: &NAMES,
        };

        render_picklist(&mut screen, &layout, &frame, &nav).unwrap();

        // Caption at (14, 12) -> cell (1, 1); footer at (16, 216) -> cell (27, 2)
        assert_eq!(screen.line(1), Some(" Select image"));
        assert_eq!(screen.line(27), Some("  MNU 1.0"));
        // First row at y = 32 -> cell row 4; cursor col 2, text col 4
        assert_eq!(screen.line(4), Some("  > a00"));
        assert_eq!(screen.line(5), Some("    a01"));
        // 20 rows drawn, a19 is the last one, v arrow sits on row 23 col 30
        assert_eq!(screen.find("a19"), Some((23, 4)));
        assert_eq!(screen.find("a20"), None);
        assert_eq!(screen.cell(23, 30), Some('v'));
        // No up arrow at the top of the list
        assert_eq!(screen.line(3), Some(""));
    }

    #[test]
    fn test_scrolled_frame_shows_both_arrows() {
        let (mut screen, layout) = setup();
        let mut nav = Navigator::new(NAMES.len(), layout.visible_rows(), NavConfig::default());
        nav.move_by(20);
        assert_eq!(nav.scroll_base(), 3);

        let frame = PicklistFrame {
            caption: "",
            footer: None,
            entries: &NAMES,
        };
        render_picklist(&mut screen, &layout, &frame, &nav).unwrap();

        assert_eq!(screen.cell(3, 30), Some('^'));
        assert_eq!(screen.line(4), Some("    a03"));
        assert_eq!(screen.find("> a20"), Some((21, 2)));
        assert_eq!(screen.cell(23, 30), Some('v'));
    }

    #[test]
    fn test_bottom_of_list_has_no_down_arrow() {
        let (mut screen, layout) = setup();
        let mut nav = Navigator::new(NAMES.len(), layout.visible_rows(), NavConfig::default());
        nav.move_by(100);
        let frame = PicklistFrame {
            caption: "",
            footer: None,
            entries: &NAMES,
        };
        render_picklist(&mut screen, &layout, &frame, &nav).unwrap();

        assert_eq!(screen.find("> a29"), Some((23, 2)));
        assert_eq!(screen.cell(23, 30), Some(' '));
        assert_eq!(screen.cell(3, 30), Some('^'));
    }

    #[test]
    fn test_long_names_truncated() {
        let (mut screen, layout) = setup();
        let long = ["0123456789012345678901234567890123456789"];
        let nav = Navigator::new(long.len(), layout.visible_rows(), NavConfig::default());
        let frame = PicklistFrame {
            caption: "",
            footer: None,
            entries: &long,
        };
        render_picklist(&mut screen, &layout, &frame, &nav).unwrap();

        // 32 text columns starting at col 4
        assert_eq!(
            screen.line(4),
            Some("  > 01234567890123456789012345678901")
        );
    }

    #[test]
    fn test_chrome_draws_window() {
        let (mut screen, layout) = setup();
        draw_chrome(&mut screen, &layout).unwrap();
        let (rect, fill) = screen.window().unwrap();
        assert_eq!(rect, layout.window());
        assert_eq!(fill, LayoutConfig::default().window_fill);
    }
}
