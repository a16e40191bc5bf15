//! ChannelPanel: the `now` view for one broadcast channel.
//!
//! Current show (title, time, location, description, genres) followed by a
//! rule and the next few shows, all inside one rounded panel.

use nts_proto::error::TimestampError;
use nts_proto::model::ChannelState;
use nts_proto::schedule::{project_compact, DisplayEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::component::Component;
use crate::theme::{style_default, style_genre, style_rule, style_time, style_title};
use crate::widgets::pane_chrome::{inner_width, pane_chrome, CHROME_HEIGHT};
use crate::widgets::text::{rule, word_wrap};

pub struct ChannelPanel {
    title: String,
    now: DisplayEntry,
    location: Option<String>,
    description: String,
    genres: Vec<String>,
    upcoming: Vec<DisplayEntry>,
}

impl ChannelPanel {
    /// `number` is the 1-based channel number shown in the panel title.
    pub fn new(number: usize, channel: &ChannelState) -> Result<Self, TimestampError> {
        let mut entries = project_compact(channel)?.into_iter();
        // project_compact always yields the current show first
        let now = entries.next().unwrap_or_else(|| DisplayEntry {
            time_range: String::new(),
            title: channel.current.title.clone(),
            is_live: true,
        });
        let details = channel.current.details.clone().unwrap_or_default();
        Ok(Self {
            title: format!("CHANNEL {}", number),
            now,
            location: details.location,
            description: details.description,
            genres: details.genres,
            upcoming: entries.collect(),
        })
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        for tl in word_wrap(&self.now.title, width) {
            lines.push(Line::from(Span::styled(tl, style_title())));
        }

        let mut time_spans = vec![Span::styled(self.now.time_range.clone(), style_time())];
        if let Some(loc) = &self.location {
            time_spans.push(Span::styled(format!(", {}", loc), style_default()));
        }
        lines.push(Line::from(time_spans));

        if !self.description.is_empty() {
            lines.push(Line::from(""));
            for dl in word_wrap(&self.description, width) {
                lines.push(Line::from(dl));
            }
        }

        if !self.genres.is_empty() {
            lines.push(Line::from(""));
            for gl in word_wrap(&self.genres.join(", "), width) {
                lines.push(Line::from(Span::styled(gl, style_genre())));
            }
        }

        lines.push(Line::from(""));
        lines.push(rule("UPCOMING SHOWS", width, style_rule()));

        for entry in &self.upcoming {
            let indent = entry.time_range.width() + 1;
            let title_lines = word_wrap(&entry.title, width.saturating_sub(indent).max(8));
            for (i, tl) in title_lines.into_iter().enumerate() {
                let lead = if i == 0 {
                    Span::styled(format!("{} ", entry.time_range), style_time())
                } else {
                    Span::raw(" ".repeat(indent))
                };
                lines.push(Line::from(vec![lead, Span::raw(tl)]));
            }
        }

        lines
    }
}

impl Component for ChannelPanel {
    fn height(&self, width: u16) -> u16 {
        let rows = self.lines(inner_width(width)).len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(inner_width(area.width));
        Paragraph::new(lines)
            .block(pane_chrome(&self.title))
            .render(area, buf);
    }
}
