//! Alert banner component

use crate::state::{AlertKind, AlertState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Alert banner height in rows
pub const ALERT_HEIGHT: u16 = 4;

/// Render the success or error banner; nothing is drawn while hidden
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &AlertState) {
    let (Some(kind), Some(message)) = (alert.kind(), alert.message()) else {
        return;
    };

    let (title, color) = match kind {
        AlertKind::Success => (" Sent ", Color::Green),
        AlertKind::Error => (" Error ", Color::Red),
    };

    let hint = Span::styled(" Esc to dismiss ", Style::default().fg(Color::DarkGray));

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(hint).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
