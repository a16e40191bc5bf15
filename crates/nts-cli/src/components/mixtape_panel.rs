//! MixtapePanel: everything known about one mixtape stream.

use nts_proto::model::MixtapeEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::component::Component;
use crate::theme::{style_genre, style_header, style_link, style_muted, style_title};
use crate::widgets::pane_chrome::{inner_width, pane_chrome, CHROME_HEIGHT};
use crate::widgets::text::word_wrap;

pub struct MixtapePanel<'a> {
    mixtape: &'a MixtapeEntry,
}

impl<'a> MixtapePanel<'a> {
    pub fn new(mixtape: &'a MixtapeEntry) -> Self {
        Self { mixtape }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let m = self.mixtape;
        let mut lines: Vec<Line<'static>> = word_wrap(&m.title, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, style_title())))
            .collect();
        if !m.subtitle.is_empty() {
            lines.extend(
                word_wrap(&m.subtitle, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, style_muted()))),
            );
        }
        if !m.description.is_empty() {
            lines.push(Line::from(""));
            lines.extend(word_wrap(&m.description, width).into_iter().map(Line::from));
        }
        if !m.credits.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Credits", style_header())));
            lines.extend(
                word_wrap(&m.credits.join(", "), width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, style_genre()))),
            );
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Stream: ", style_header()),
            Span::styled(m.stream_url.clone(), style_link()),
        ]));
        lines
    }
}

impl Component for MixtapePanel<'_> {
    fn height(&self, width: u16) -> u16 {
        let rows = self.lines(inner_width(width)).len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let title = format!("MIXTAPE {}", self.mixtape.alias);
        Paragraph::new(self.lines(inner_width(area.width)))
            .block(pane_chrome(&title))
            .render(area, buf);
    }
}
