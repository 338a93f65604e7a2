//! Capability interface between the form controller and whatever renders the form

use crate::state::{AlertKind, FieldId};

/// Something the host can bring into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Field(FieldId),
    Alert(AlertKind),
}

/// Enabled state and label of the submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            enabled: false,
            label: label.into(),
        }
    }
}

/// Page operations the controller needs. Implementations own the field values,
/// the error classes on field groups, the alert containers and the submit control.
pub trait FormHost {
    /// Current raw value of a field
    fn value(&self, field: FieldId) -> &str;

    fn set_value(&mut self, field: FieldId, value: &str);

    /// Whether the field's group currently carries the error class
    fn has_error(&self, field: FieldId) -> bool;

    fn set_error_state(&mut self, field: FieldId, invalid: bool);

    /// Show an alert, replacing whatever alert is visible
    fn show_alert(&mut self, kind: AlertKind, message: &str);

    /// Hide the alert of the given kind if it is the one showing
    fn hide_alert(&mut self, kind: AlertKind);

    fn submit_control(&self) -> SubmitControl;

    fn set_submit_control(&mut self, control: SubmitControl);

    fn scroll_into_view(&mut self, target: ScrollTarget);
}
