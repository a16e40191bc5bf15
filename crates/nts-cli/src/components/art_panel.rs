//! ArtPanel: "SHOW ART" panel above a channel, or the reason it is missing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::art::CoverArt;
use crate::component::Component;
use crate::theme::{style_error, C_BORDER_ERROR};
use crate::widgets::pane_chrome::{inner_width, pane_chrome, pane_chrome_colored, CHROME_HEIGHT};
use crate::widgets::text::word_wrap;

const TITLE: &str = "SHOW ART";

pub enum ArtPanel {
    Image { art: CoverArt, color: bool },
    Error(String),
}

impl ArtPanel {
    pub fn error(reason: impl std::fmt::Display) -> Self {
        Self::Error(format!("Error loading show art: {}", reason))
    }

    fn error_lines(message: &str, width: u16) -> Vec<Line<'static>> {
        word_wrap(message, inner_width(width))
            .into_iter()
            .map(|l| Line::styled(l, style_error()))
            .collect()
    }
}

impl Component for ArtPanel {
    fn height(&self, width: u16) -> u16 {
        let rows = match self {
            Self::Image { art, .. } => art.cell_size().1,
            Self::Error(message) => {
                u16::try_from(Self::error_lines(message, width).len()).unwrap_or(u16::MAX)
            }
        };
        rows.saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        match self {
            Self::Image { art, color } => {
                let block = pane_chrome(TITLE);
                let inner = block.inner(area);
                block.render(area, buf);
                art.widget(*color).render(inner, buf);
            }
            Self::Error(message) => {
                Paragraph::new(Self::error_lines(message, area.width))
                    .block(pane_chrome_colored(TITLE, C_BORDER_ERROR))
                    .render(area, buf);
            }
        }
    }
}
