//! ScheduleTable: full schedule for one channel as a Time / Show / Type table.

use nts_proto::error::TimestampError;
use nts_proto::model::ChannelState;
use nts_proto::schedule::{project_full, DisplayEntry};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Cell, Row, Table, Widget},
};

use crate::component::Component;
use crate::theme::{style_current, style_header, style_time, style_type};
use crate::widgets::pane_chrome::{pane_chrome, CHROME_HEIGHT};

const TIME_WIDTH: u16 = 13;
const TYPE_WIDTH: u16 = 6;

pub struct ScheduleTable {
    title: String,
    entries: Vec<DisplayEntry>,
}

impl ScheduleTable {
    pub fn new(number: usize, channel: &ChannelState) -> Result<Self, TimestampError> {
        Ok(Self {
            title: format!("Channel {} Schedule", number),
            entries: project_full(channel)?,
        })
    }
}

impl Component for ScheduleTable {
    fn height(&self, _width: u16) -> u16 {
        // border + header + one row per entry
        let rows = u16::try_from(self.entries.len()).unwrap_or(u16::MAX);
        rows.saturating_add(1).saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec!["Time", "Show", "Type"]).style(style_header());
        let rows = self.entries.iter().enumerate().map(|(i, entry)| {
            let row = Row::new(vec![
                Cell::from(Text::styled(entry.time_range.clone(), style_time())),
                Cell::from(entry.title.clone()),
                Cell::from(Text::styled(entry.kind_label(), style_type())),
            ]);
            if i == 0 {
                row.style(style_current())
            } else {
                row
            }
        });
        let widths = [
            Constraint::Length(TIME_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(TYPE_WIDTH),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(pane_chrome(&self.title))
            .render(area, buf);
    }
}
