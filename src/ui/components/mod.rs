//! Reusable UI components

mod alert;
mod button;

pub use alert::{render_alert, ALERT_HEIGHT};
pub use button::{render_submit_button, BUTTON_HEIGHT};
