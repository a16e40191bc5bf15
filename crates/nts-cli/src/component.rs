//! Component trait: the interface every printable view implements.
//!
//! Components are built from already-shaped data, report how tall they are
//! at a given width, and draw themselves into an off-screen buffer. They
//! never fetch or format timestamps themselves.

use ratatui::{buffer::Buffer, layout::Rect};

pub trait Component {
    /// Rows needed to draw this component `width` columns wide.
    fn height(&self, width: u16) -> u16;

    /// Render into `area`, which is at least `height(area.width)` tall.
    fn draw(&self, area: Rect, buf: &mut Buffer);
}
