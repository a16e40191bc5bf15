//! MixtapeTable: Alias / Title / Subtitle rows for `mixtape list` and `search`.

use nts_proto::model::MixtapeEntry;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Cell, Row, Table, Widget},
};

use crate::component::Component;
use crate::theme::{style_header, style_muted, style_title};
use crate::widgets::pane_chrome::{pane_chrome, CHROME_HEIGHT};

pub struct MixtapeTable {
    title: String,
    rows: Vec<[String; 3]>,
}

impl MixtapeTable {
    pub fn new<'a>(
        title: impl Into<String>,
        entries: impl IntoIterator<Item = &'a MixtapeEntry>,
    ) -> Self {
        let rows = entries
            .into_iter()
            .map(|m| [m.alias.clone(), m.title.clone(), m.subtitle.clone()])
            .collect();
        Self {
            title: title.into(),
            rows,
        }
    }

    fn alias_width(&self) -> u16 {
        let widest = self
            .rows
            .iter()
            .map(|r| unicode_width::UnicodeWidthStr::width(r[0].as_str()))
            .max()
            .unwrap_or(0)
            .max("Alias".len());
        u16::try_from(widest).unwrap_or(u16::MAX)
    }
}

impl Component for MixtapeTable {
    fn height(&self, _width: u16) -> u16 {
        let rows = u16::try_from(self.rows.len()).unwrap_or(u16::MAX);
        rows.saturating_add(1).saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec!["Alias", "Title", "Subtitle"]).style(style_header());
        let rows = self.rows.iter().map(|[alias, title, subtitle]| {
            Row::new(vec![
                Cell::from(alias.clone()),
                Cell::from(Text::styled(title.clone(), style_title())),
                Cell::from(Text::styled(subtitle.clone(), style_muted())),
            ])
        });
        let widths = [
            Constraint::Length(self.alias_width()),
            Constraint::Fill(1),
            Constraint::Fill(2),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(pane_chrome(&self.title))
            .render(area, buf);
    }
}
