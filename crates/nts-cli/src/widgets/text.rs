//! Plain-text layout helpers: wrapping by display width and horizontal rules.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap measured in terminal columns. Words wider than `width`
/// are split across lines. Blank input paragraphs become empty lines.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0usize;
        for word in paragraph.split_whitespace() {
            let word_w = word.width();
            if current_w > 0 && current_w + 1 + word_w <= width {
                current.push(' ');
                current.push_str(word);
                current_w += 1 + word_w;
                continue;
            }
            if current_w > 0 {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
            if word_w <= width {
                current.push_str(word);
                current_w = word_w;
            } else {
                for ch in word.chars() {
                    let ch_w = ch.width().unwrap_or(0);
                    if current_w + ch_w > width && current_w > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_w = 0;
                    }
                    current.push(ch);
                    current_w += ch_w;
                }
            }
        }
        if !current.is_empty() || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// `──── TITLE ────` spanning `width` columns.
pub fn rule(title: &str, width: usize, style: Style) -> Line<'static> {
    let label = format!(" {} ", title);
    let side = width.saturating_sub(label.width());
    let left = side / 2;
    let right = side - left;
    Line::from(vec![
        Span::styled("─".repeat(left), style),
        Span::styled(label, style.add_modifier(Modifier::BOLD)),
        Span::styled("─".repeat(right), style),
    ])
}
