//! Application state and core logic

use crate::client::{HttpTransport, SubmitTransport};
use crate::config::FormSettings;
use crate::controller::{FormController, Preparation, PreparedSubmission, SubmitOutcome};
use crate::state::{ContactForm, Focus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<T: SubmitTransport = HttpTransport> {
    /// Form fields, alert banner and submit button
    pub form: ContactForm,
    /// Validation and submission logic
    controller: FormController<T>,
    /// Validated payload waiting to be sent on the next loop pass
    pending: Option<PreparedSubmission>,
    /// Outcome of the most recent submit attempt
    pub last_outcome: Option<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App<HttpTransport> {
    /// Create a new App instance backed by the HTTP transport
    pub fn new(settings: FormSettings) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(transport, settings))
    }
}

impl<T: SubmitTransport> App<T> {
    pub fn with_transport(transport: T, settings: FormSettings) -> Self {
        Self {
            form: ContactForm::new(),
            controller: FormController::new(transport, settings),
            pending: None,
            last_outcome: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn settings(&self) -> &FormSettings {
        self.controller.settings()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::Esc => self.controller.dismiss_alerts(&mut self.form),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => match self.form.focus() {
                Focus::SubmitButton => self.request_submit(),
                Focus::Field(_) if self.form.is_active_field_multiline() => {
                    self.type_char('\n')
                }
                Focus::Field(_) => self.focus_next(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.form.pop_char() {
                    self.controller.handle_input(&mut self.form, field);
                }
            }
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        if let Some(field) = self.form.push_char(c) {
            self.controller.handle_input(&mut self.form, field);
        }
    }

    fn focus_next(&mut self) {
        if let Some(left) = self.form.next_focus() {
            self.controller.handle_blur(&mut self.form, left);
        }
    }

    fn focus_prev(&mut self) {
        if let Some(left) = self.form.prev_focus() {
            self.controller.handle_blur(&mut self.form, left);
        }
    }

    /// Validate and lock the form; the request goes out on the next loop pass
    /// so the busy label is drawn first
    pub fn request_submit(&mut self) {
        match self.controller.prepare_submission(&mut self.form) {
            Preparation::Ready(prepared) => self.pending = Some(prepared),
            Preparation::Halted(outcome) => self.last_outcome = Some(outcome),
        }
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Send the pending submission, if any
    pub async fn flush_submission(&mut self) {
        if let Some(prepared) = self.pending.take() {
            let outcome = self
                .controller
                .send_submission(&mut self.form, prepared)
                .await;
            self.last_outcome = Some(outcome);
        }
    }

    /// Advance alert timers
    pub fn tick(&mut self) -> bool {
        self.controller.tick(&mut self.form)
    }
}
