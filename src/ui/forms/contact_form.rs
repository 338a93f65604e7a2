//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::client::SubmitTransport;
use crate::state::{FieldId, Focus};
use crate::ui::components::{render_alert, render_submit_button, ALERT_HEIGHT, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields shown in the left column
const LEFT_COLUMN: [FieldId; 4] = [
    FieldId::FullName,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Company,
];

/// Fields shown in the right column
const RIGHT_COLUMN: [FieldId; 3] = [FieldId::Subject, FieldId::TravelDates, FieldId::Budget];

/// Draw the contact form: fields, submit button and alert banner
pub fn draw_contact_form<T: SubmitTransport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let block = Block::default()
        .title(" Contact TravelEase ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 * LEFT_COLUMN.len() as u16), // Single-line fields
            Constraint::Min(5),                               // Message
            Constraint::Length(BUTTON_HEIGHT),                // Submit
            Constraint::Length(ALERT_HEIGHT),                 // Alert banner
        ])
        .margin(1)
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_column(frame, columns[0], app, &LEFT_COLUMN);
    draw_column(frame, columns[1], app, &RIGHT_COLUMN);

    draw_form_field(frame, chunks[1], app, FieldId::Message);

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(chunks[2])[1];
    render_submit_button(
        frame,
        button_area,
        &app.form.submit,
        app.form.focus() == Focus::SubmitButton,
    );

    render_alert(frame, chunks[3], &app.form.alert);
}

fn draw_column<T: SubmitTransport>(
    frame: &mut Frame,
    area: Rect,
    app: &App<T>,
    ids: &[FieldId],
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ids.iter().map(|_| Constraint::Length(3)))
        .split(area);

    for (id, row) in ids.iter().zip(rows.iter()) {
        draw_form_field(frame, *row, app, *id);
    }
}

fn draw_form_field<T: SubmitTransport>(
    frame: &mut Frame,
    area: Rect,
    app: &App<T>,
    id: FieldId,
) {
    let is_active = app.form.focus() == Focus::Field(id);
    draw_field(frame, area, app.form.field(id), is_active);
}
