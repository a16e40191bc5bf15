//! PaneChrome: the rounded, titled border shared by every panel and table.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding},
};

use crate::theme::C_BORDER;

/// Columns taken by the border plus one column of horizontal padding per side.
pub const CHROME_WIDTH: u16 = 4;

/// Rows taken by the top and bottom border.
pub const CHROME_HEIGHT: u16 = 2;

/// A rounded panel with a centred title and one column of side padding.
pub fn pane_chrome(title: &str) -> Block<'_> {
    pane_chrome_colored(title, C_BORDER)
}

/// Like `pane_chrome` with an explicit border colour (e.g. red for errors).
pub fn pane_chrome_colored(title: &str, border: Color) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
}

/// Inner text width of a panel `outer` columns wide.
pub fn inner_width(outer: u16) -> usize {
    usize::from(outer.saturating_sub(CHROME_WIDTH)).max(1)
}
