//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field; fields in error get a red border and their hint
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if field.has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let border_style = Style::default().fg(accent);

    let display_str = if field.value.is_empty() && !is_active {
        "(empty)"
    } else {
        field.value.as_str()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.id.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if field.has_error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", field.id.error_hint()),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
