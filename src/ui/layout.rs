//! Screen layout and status bar

use crate::app::App;
use crate::client::SubmitTransport;
use crate::controller::SubmitOutcome;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar<T: SubmitTransport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let mut spans = vec![];

    // Endpoint status
    let settings = app.settings();
    if settings.is_configured() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
        spans.push(Span::styled(
            settings.api_url.as_str(),
            Style::default().fg(Color::Blue),
        ));
    } else {
        spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red)));
        spans.push(Span::styled(
            "API URL not configured",
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(span) = app.last_outcome.as_ref().and_then(outcome_span) {
        spans.push(Span::raw(" | "));
        spans.push(span);
    }

    if app.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Sending...", Style::default().fg(Color::Yellow)));
    }

    spans.push(Span::raw(" | "));
    let hints = format!(
        "Tab/↑↓: move  Enter: next/send  {SUBMIT_SHORTCUT}: send  Esc: dismiss  {QUIT_SHORTCUT}: quit"
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Short summary of the last submit attempt
fn outcome_span(outcome: &SubmitOutcome) -> Option<Span<'static>> {
    match outcome {
        SubmitOutcome::Succeeded {
            submission_id: Some(id),
        } => Some(Span::styled(
            format!("Reference: {id}"),
            Style::default().fg(Color::Green),
        )),
        SubmitOutcome::Rejected {
            first_invalid: Some(field),
        } => Some(Span::styled(
            format!("Check {}", field.label().trim_end_matches(" *")),
            Style::default().fg(Color::Red),
        )),
        SubmitOutcome::Failed { message } => Some(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        _ => None,
    }
}
