//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::client::SubmitTransport;
use ratatui::Frame;

/// Main draw function
pub fn draw<T: SubmitTransport>(frame: &mut Frame, app: &App<T>) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, main_area, app);

    layout::draw_status_bar(frame, status_area, app);
}
