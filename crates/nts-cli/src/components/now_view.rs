//! NowView: every channel's panel side by side, each with optional art on top.
//!
//! Falls back to stacking channels vertically when the terminal is too
//! narrow for two readable columns.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use crate::component::Component;
use crate::components::art_panel::ArtPanel;
use crate::components::channel_panel::ChannelPanel;
use crate::widgets::pane_chrome::CHROME_WIDTH;

/// Narrowest column we are willing to lay channels out in side by side.
pub const MIN_COLUMN_WIDTH: u16 = 40;

pub struct ChannelColumn {
    pub art: Option<ArtPanel>,
    pub panel: ChannelPanel,
}

impl ChannelColumn {
    fn height(&self, width: u16) -> u16 {
        let art = self.art.as_ref().map_or(0, |a| a.height(width));
        art.saturating_add(self.panel.height(width))
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        if let Some(art) = &self.art {
            let h = art.height(area.width);
            art.draw(Rect::new(area.x, y, area.width, h), buf);
            y += h;
        }
        let h = self.panel.height(area.width);
        self.panel.draw(Rect::new(area.x, y, area.width, h), buf);
    }
}

pub struct NowView {
    columns: Vec<ChannelColumn>,
}

/// Width of one channel column for `channels` channels on a `total`-wide terminal.
pub fn column_width(total: u16, channels: usize) -> u16 {
    let n = u16::try_from(channels.max(1)).unwrap_or(u16::MAX);
    if n > 1 && total / n >= MIN_COLUMN_WIDTH {
        total / n
    } else {
        total
    }
}

/// Art size (pixels) that fits inside a column, keeping the requested aspect.
pub fn fit_art(width: u16, height: u16, column: u16) -> (u16, u16) {
    let max_w = column.saturating_sub(CHROME_WIDTH).max(1);
    if width <= max_w {
        return (width, height);
    }
    let scaled = u32::from(height) * u32::from(max_w) / u32::from(width.max(1));
    (max_w, u16::try_from(scaled).unwrap_or(height).max(1))
}

impl NowView {
    pub fn new(columns: Vec<ChannelColumn>) -> Self {
        Self { columns }
    }

    fn side_by_side(&self, width: u16) -> bool {
        self.columns.len() > 1 && column_width(width, self.columns.len()) < width
    }

    fn areas(&self, area: Rect) -> Vec<Rect> {
        let n = self.columns.len().max(1) as u32;
        let constraints = vec![Constraint::Ratio(1, n); self.columns.len()];
        Layout::horizontal(constraints).split(area).to_vec()
    }
}

impl Component for NowView {
    fn height(&self, width: u16) -> u16 {
        if self.side_by_side(width) {
            let col = column_width(width, self.columns.len());
            self.columns.iter().map(|c| c.height(col)).max().unwrap_or(0)
        } else {
            self.columns
                .iter()
                .fold(0u16, |acc, c| acc.saturating_add(c.height(width)))
        }
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        if self.side_by_side(area.width) {
            for (column, col_area) in self.columns.iter().zip(self.areas(area)) {
                column.draw(col_area, buf);
            }
        } else {
            let mut y = area.y;
            for column in &self.columns {
                let h = column.height(area.width);
                column.draw(Rect::new(area.x, y, area.width, h), buf);
                y += h;
            }
        }
    }
}
