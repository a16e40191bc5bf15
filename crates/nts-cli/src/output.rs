//! Off-screen rendering: components draw into a ratatui `Buffer` sized to
//! their content, which is then written out line by line, with or without
//! SGR color sequences.

use std::io::{self, Write};

use ratatui::buffer::Buffer;
use ratatui::crossterm::{
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use unicode_width::UnicodeWidthStr;

use crate::component::Component;

/// How to render for this invocation. Passed explicitly to every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub width: u16,
}

#[cfg(test)]
impl RenderOptions {
    pub fn plain(width: u16) -> Self {
        Self {
            color: false,
            width,
        }
    }
}

/// Current terminal width, or `fallback` when stdout is not a terminal.
pub fn terminal_width(fallback: u16) -> u16 {
    ratatui::crossterm::terminal::size()
        .map(|(w, _)| w)
        .ok()
        .filter(|&w| w > 0)
        .unwrap_or(fallback)
}

/// Draw `component` into a fresh buffer exactly as tall as it needs.
pub fn render_component(component: &dyn Component, width: u16) -> Buffer {
    let height = component.height(width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    component.draw(area, &mut buf);
    buf
}

pub fn write_component<W: Write>(
    component: &dyn Component,
    options: RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let buf = render_component(component, options.width);
    write_buffer(&buf, options.color, out)
}

#[derive(Clone, Copy, PartialEq)]
struct CellStyle {
    fg: Color,
    bg: Color,
    modifier: Modifier,
}

const PLAIN: CellStyle = CellStyle {
    fg: Color::Reset,
    bg: Color::Reset,
    modifier: Modifier::empty(),
};

/// Emit every row of `buf`. Trailing blank cells are dropped; the cell after
/// a wide glyph is skipped since the glyph already covers it.
pub fn write_buffer<W: Write>(buf: &Buffer, color: bool, out: &mut W) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let last = (area.left()..area.right()).rev().find(|&x| {
            let cell = &buf[(x, y)];
            cell.symbol() != " " || (color && cell.bg != Color::Reset)
        });
        let Some(last) = last else {
            writeln!(out)?;
            continue;
        };

        let mut current = PLAIN;
        let mut skip = 0usize;
        for x in area.left()..=last {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let cell = &buf[(x, y)];
            if color {
                let style = CellStyle {
                    fg: cell.fg,
                    bg: cell.bg,
                    modifier: cell.modifier,
                };
                if style != current {
                    apply_style(out, style)?;
                    current = style;
                }
            }
            let symbol = cell.symbol();
            out.write_all(symbol.as_bytes())?;
            skip = symbol.width().saturating_sub(1);
        }
        if current != PLAIN {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn apply_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if let Some(fg) = to_crossterm(style.fg) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = to_crossterm(style.bg) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    let attributes = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (modifier, attribute) in attributes {
        if style.modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn to_crossterm(color: Color) -> Option<CtColor> {
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::Gray => CtColor::Grey,
        Color::DarkGray => CtColor::DarkGrey,
        Color::LightRed => CtColor::Red,
        Color::LightGreen => CtColor::Green,
        Color::LightYellow => CtColor::Yellow,
        Color::LightBlue => CtColor::Blue,
        Color::LightMagenta => CtColor::Magenta,
        Color::LightCyan => CtColor::Cyan,
        Color::White => CtColor::White,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        Color::Indexed(i) => CtColor::AnsiValue(i),
    };
    Some(mapped)
}
