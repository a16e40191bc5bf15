//! InfoPanel: static facts about the station and how to listen.

use nts_proto::config::StreamsConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::component::Component;
use crate::theme::{style_header, style_link, style_muted, style_title};
use crate::widgets::pane_chrome::{inner_width, pane_chrome, CHROME_HEIGHT};
use crate::widgets::text::word_wrap;

pub const WEBSITE: &str = "https://www.nts.live";

const ABOUT: &str = "NTS is an online radio station broadcasting two live channels \
                     from London, Los Angeles and around the world, alongside a \
                     set of always-on mixtape streams.";

pub struct InfoPanel {
    streams: Vec<String>,
}

impl InfoPanel {
    pub fn new(streams: &StreamsConfig) -> Self {
        Self {
            streams: streams.channel_urls.clone(),
        }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled("NTS Radio", style_title()))];
        lines.extend(word_wrap(ABOUT, width).into_iter().map(Line::from));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Live streams", style_header())));
        for (i, url) in self.streams.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw(format!("Channel {}: ", i + 1)),
                Span::styled(url.clone(), style_link()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Website: ", style_header()),
            Span::styled(WEBSITE, style_link()),
        ]));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Mixtapes", style_header())));
        for (cmd, what) in [
            ("nts mixtape list", "all mixtape streams"),
            ("nts mixtape search <query>", "find a mixtape"),
            ("nts mixtape play <name>", "listen to one"),
            ("nts mixtape random", "shuffle until Ctrl-C"),
        ] {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<28}", cmd)),
                Span::styled(what, style_muted()),
            ]));
        }
        lines
    }
}

impl Component for InfoPanel {
    fn height(&self, width: u16) -> u16 {
        let rows = self.lines(inner_width(width)).len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(CHROME_HEIGHT)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(inner_width(area.width)))
            .block(pane_chrome("NTS INFO"))
            .render(area, buf);
    }
}
