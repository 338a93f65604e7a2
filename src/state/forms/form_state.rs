//! Contact form state, the terminal host for the form controller

use super::field::{FieldId, FormField};
use crate::controller::{FormHost, ScrollTarget, SubmitControl};
use crate::state::{AlertKind, AlertState};

/// Label of the submit button when idle
pub const SUBMIT_LABEL: &str = "Send Message";

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    SubmitButton,
}

/// All fields, the alert banner and the submit button of the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    /// Index into `fields`; `fields.len()` is the submit button
    pub active_index: usize,
    pub alert: AlertState,
    pub submit: SubmitControl,
    /// Last target the controller asked to bring into view
    #[cfg(test)]
    pub scrolled_to: Option<ScrollTarget>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.iter().map(|id| FormField::new(*id)).collect(),
            active_index: 0,
            alert: AlertState::Hidden,
            submit: SubmitControl::enabled(SUBMIT_LABEL),
            #[cfg(test)]
            scrolled_to: None,
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        let index = Self::index_of(id);
        &self.fields[index]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        let index = Self::index_of(id);
        &mut self.fields[index]
    }

    fn index_of(id: FieldId) -> usize {
        FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0)
    }

    fn focus_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button
    }

    pub fn focus(&self) -> Focus {
        match self.fields.get(self.active_index) {
            Some(field) => Focus::Field(field.id),
            None => Focus::SubmitButton,
        }
    }

    pub fn focus_field(&mut self, id: FieldId) {
        self.active_index = Self::index_of(id);
    }

    /// Move focus forward (wraps around). Returns the field that lost focus.
    pub fn next_focus(&mut self) -> Option<FieldId> {
        let left = self.active_field_id();
        self.active_index = (self.active_index + 1) % self.focus_count();
        left
    }

    /// Move focus backward (wraps around). Returns the field that lost focus.
    pub fn prev_focus(&mut self) -> Option<FieldId> {
        let left = self.active_field_id();
        if self.active_index == 0 {
            self.active_index = self.focus_count() - 1;
        } else {
            self.active_index -= 1;
        }
        left
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        match self.focus() {
            Focus::Field(id) => Some(id),
            Focus::SubmitButton => None,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.fields
            .get(self.active_index)
            .is_some_and(|f| f.is_multiline())
    }

    /// Type into the focused field. Returns the edited field.
    pub fn push_char(&mut self, c: char) -> Option<FieldId> {
        let field = self.fields.get_mut(self.active_index)?;
        field.push_char(c);
        Some(field.id)
    }

    /// Delete the last character of the focused field. Returns the edited field.
    pub fn pop_char(&mut self) -> Option<FieldId> {
        let field = self.fields.get_mut(self.active_index)?;
        field.pop_char();
        Some(field.id)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHost for ContactForm {
    fn value(&self, field: FieldId) -> &str {
        &self.field(field).value
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        let field = self.field_mut(field);
        field.clear();
        field.value.push_str(value);
    }

    fn has_error(&self, field: FieldId) -> bool {
        self.field(field).has_error
    }

    fn set_error_state(&mut self, field: FieldId, invalid: bool) {
        self.field_mut(field).has_error = invalid;
    }

    fn show_alert(&mut self, kind: AlertKind, message: &str) {
        self.alert = AlertState::shown(kind, message);
    }

    fn hide_alert(&mut self, kind: AlertKind) {
        if self.alert.kind() == Some(kind) {
            self.alert = AlertState::Hidden;
        }
    }

    fn submit_control(&self) -> SubmitControl {
        self.submit.clone()
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        self.submit = control;
    }

    fn scroll_into_view(&mut self, target: ScrollTarget) {
        if let ScrollTarget::Field(id) = target {
            self.focus_field(id);
        }
        #[cfg(test)]
        {
            self.scrolled_to = Some(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();
        assert_eq!(form.fields().len(), 8);
        assert!(form.fields().iter().all(|f| f.value.is_empty() && !f.has_error));
        assert_eq!(form.alert, AlertState::Hidden);
        assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
        assert_eq!(form.focus(), Focus::Field(FieldId::FullName));
    }

    #[test]
    fn test_focus_wraps_through_submit_button() {
        let mut form = ContactForm::new();
        assert_eq!(form.prev_focus(), Some(FieldId::FullName));
        assert_eq!(form.focus(), Focus::SubmitButton);
        assert_eq!(form.next_focus(), None);
        assert_eq!(form.focus(), Focus::Field(FieldId::FullName));
        assert_eq!(form.next_focus(), Some(FieldId::FullName));
        assert_eq!(form.focus(), Focus::Field(FieldId::Email));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.focus_field(FieldId::Email);
        assert_eq!(form.push_char('a'), Some(FieldId::Email));
        assert_eq!(form.push_char('b'), Some(FieldId::Email));
        assert_eq!(form.pop_char(), Some(FieldId::Email));
        assert_eq!(form.value(FieldId::Email), "a");
    }

    #[test]
    fn test_typing_on_submit_button_is_ignored() {
        let mut form = ContactForm::new();
        form.prev_focus();
        assert_eq!(form.push_char('x'), None);
        assert_eq!(form.pop_char(), None);
    }

    #[test]
    fn test_hide_alert_only_hides_matching_kind() {
        let mut form = ContactForm::new();
        form.show_alert(AlertKind::Success, "Sent");
        form.hide_alert(AlertKind::Error);
        assert_eq!(form.alert, AlertState::Success("Sent".to_string()));
        form.hide_alert(AlertKind::Success);
        assert_eq!(form.alert, AlertState::Hidden);
    }

    #[test]
    fn test_scroll_to_field_moves_focus() {
        let mut form = ContactForm::new();
        form.scroll_into_view(ScrollTarget::Field(FieldId::Message));
        assert_eq!(form.focus(), Focus::Field(FieldId::Message));
        assert!(form.is_active_field_multiline());

        form.scroll_into_view(ScrollTarget::Alert(AlertKind::Error));
        assert_eq!(form.focus(), Focus::Field(FieldId::Message));
        assert_eq!(
            form.scrolled_to,
            Some(ScrollTarget::Alert(AlertKind::Error))
        );
    }
}
