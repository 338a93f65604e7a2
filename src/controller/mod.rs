//! Contact form controller
//!
//! Validates fields as the user moves through the form, guards and performs
//! the submission, and drives the alert banner. All page access goes through
//! [`FormHost`], so the same controller runs against the terminal form or any
//! other host.

mod host;
mod payload;
mod validation;

pub use host::{FormHost, ScrollTarget, SubmitControl};
pub use payload::SubmissionPayload;
pub use validation::validate_value;

use crate::client::SubmitTransport;
use crate::config::FormSettings;
use crate::state::{AlertKind, AlertTimer, FieldId};
use tokio::time::Instant;

pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors above and try again.";
pub const SUCCESS_MESSAGE: &str =
    "✅ Thank you! Your message has been sent successfully. We'll get back to you soon.";
pub const SEND_FAILED_FALLBACK: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "❌ Network error. Please check your connection and try again.";
pub const BUSY_LABEL: &str = "Sending...";

/// Where the controller is in a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent
    Rejected { first_invalid: Option<FieldId> },
    /// Another submission is still in flight
    Busy,
    Succeeded { submission_id: Option<String> },
    /// The server answered with a non-2xx status
    Failed { message: String },
    /// The request never completed
    NetworkError,
}

/// A validated payload with the submit control locked. Only
/// [`FormController::prepare_submission`] creates one, so nothing reaches the
/// transport without passing validation first.
#[derive(Debug, PartialEq, Eq)]
pub struct PreparedSubmission {
    payload: SubmissionPayload,
    /// Submit label to restore once the request finishes
    restore_label: String,
}

/// Result of the synchronous half of a submission
#[derive(Debug, PartialEq, Eq)]
pub enum Preparation {
    /// Validation passed and the submit control is disabled; send this
    Ready(PreparedSubmission),
    /// Nothing to send
    Halted(SubmitOutcome),
}

/// Drives validation and submission of the contact form
pub struct FormController<T: SubmitTransport> {
    transport: T,
    settings: FormSettings,
    phase: Phase,
    alert_timer: Option<AlertTimer>,
}

impl<T: SubmitTransport> FormController<T> {
    pub fn new(transport: T, settings: FormSettings) -> Self {
        Self {
            transport,
            settings,
            phase: Phase::Idle,
            alert_timer: None,
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    /// Validate one field and toggle the error state on its group
    pub fn validate_field<H: FormHost + ?Sized>(&self, host: &mut H, field: FieldId) -> bool {
        let valid = validate_value(field, host.value(field));
        host.set_error_state(field, !valid);
        tracing::debug!(field = field.element_id(), valid, "validated field");
        valid
    }

    /// Focus left the field: check it right away
    pub fn handle_blur<H: FormHost + ?Sized>(&self, host: &mut H, field: FieldId) -> bool {
        self.validate_field(host, field)
    }

    /// The field's value changed: only recheck fields already shown as invalid
    pub fn handle_input<H: FormHost + ?Sized>(
        &self,
        host: &mut H,
        field: FieldId,
    ) -> Option<bool> {
        if host.has_error(field) {
            Some(self.validate_field(host, field))
        } else {
            None
        }
    }

    /// Validate every field. Returns the first invalid one in form order.
    fn validate_all<H: FormHost + ?Sized>(&self, host: &mut H) -> Option<FieldId> {
        let mut first_invalid = None;
        for field in FieldId::ALL {
            if !self.validate_field(host, field) && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        first_invalid
    }

    /// Show an alert and arm its auto-hide, replacing any earlier timer
    pub fn show_alert<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        kind: AlertKind,
        message: &str,
    ) {
        host.show_alert(kind, message);
        self.alert_timer = Some(AlertTimer::new(
            kind,
            Instant::now() + self.settings.alert_timeout,
        ));
    }

    /// Hide both alerts and cancel the pending auto-hide
    pub fn dismiss_alerts<H: FormHost + ?Sized>(&mut self, host: &mut H) {
        host.hide_alert(AlertKind::Success);
        host.hide_alert(AlertKind::Error);
        self.alert_timer = None;
    }

    /// Hide the alert once its timer has run out. Returns true if it was hidden.
    pub fn tick<H: FormHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.alert_timer {
            Some(timer) if timer.is_expired(Instant::now()) => {
                host.hide_alert(timer.kind);
                self.alert_timer = None;
                true
            }
            _ => false,
        }
    }

    /// Validate the form and lock the submit control.
    ///
    /// On success the controller is in the submitting phase and the caller must
    /// finish with [`FormController::send_submission`].
    pub fn prepare_submission<H: FormHost + ?Sized>(&mut self, host: &mut H) -> Preparation {
        if self.is_submitting() {
            tracing::debug!("submit ignored, request already in flight");
            return Preparation::Halted(SubmitOutcome::Busy);
        }

        self.dismiss_alerts(host);

        self.phase = Phase::Validating;
        let first_invalid = self.validate_all(host);
        self.phase = Phase::Idle;

        if let Some(field) = first_invalid {
            tracing::warn!(
                first_invalid = field.element_id(),
                "submission blocked by validation"
            );
            self.show_alert(host, AlertKind::Error, VALIDATION_FAILED_MESSAGE);
            host.scroll_into_view(ScrollTarget::Field(field));
            return Preparation::Halted(SubmitOutcome::Rejected {
                first_invalid: Some(field),
            });
        }

        let restore_label = host.submit_control().label;
        host.set_submit_control(SubmitControl::disabled(BUSY_LABEL));
        self.phase = Phase::Submitting;

        Preparation::Ready(PreparedSubmission {
            payload: SubmissionPayload::from_host(&*host),
            restore_label,
        })
    }

    /// Send a prepared submission and render the result
    pub async fn send_submission<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        prepared: PreparedSubmission,
    ) -> SubmitOutcome {
        let PreparedSubmission {
            payload,
            restore_label,
        } = prepared;
        tracing::info!(endpoint = %self.settings.api_url, "submitting contact form");

        let result = self
            .transport
            .post_json(&self.settings.api_url, &payload)
            .await;

        let outcome = match result {
            Ok(response) if response.is_success() => {
                let submission_id = response.submission_id().map(str::to_string);
                tracing::info!(?submission_id, "contact form submitted");

                self.show_alert(host, AlertKind::Success, SUCCESS_MESSAGE);
                for field in FieldId::ALL {
                    host.set_value(field, "");
                    host.set_error_state(field, false);
                }
                host.scroll_into_view(ScrollTarget::Alert(AlertKind::Success));

                SubmitOutcome::Succeeded { submission_id }
            }
            Ok(response) => {
                let detail = response.error_message().unwrap_or(SEND_FAILED_FALLBACK);
                tracing::warn!(
                    status = response.status,
                    detail,
                    "submission rejected by server"
                );

                let message = format!("❌ Error: {detail}");
                self.show_alert(host, AlertKind::Error, &message);
                host.scroll_into_view(ScrollTarget::Alert(AlertKind::Error));

                SubmitOutcome::Failed { message }
            }
            Err(err) => {
                tracing::error!(error = %err, "submission request failed");

                self.show_alert(host, AlertKind::Error, NETWORK_ERROR_MESSAGE);
                host.scroll_into_view(ScrollTarget::Alert(AlertKind::Error));

                SubmitOutcome::NetworkError
            }
        };

        host.set_submit_control(SubmitControl::enabled(restore_label));
        self.phase = Phase::Idle;

        outcome
    }

    /// Validate and submit in one go
    #[cfg(test)]
    pub async fn submit<H: FormHost + ?Sized>(&mut self, host: &mut H) -> SubmitOutcome {
        match self.prepare_submission(host) {
            Preparation::Ready(prepared) => self.send_submission(host, prepared).await,
            Preparation::Halted(outcome) => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiResponse, MockSubmitTransport, TransportError};
    use crate::state::{AlertState, ContactForm, SUBMIT_LABEL};
    use serde_json::json;
    use std::time::Duration;

    const ENDPOINT: &str = "https://api.example.com/prod/submit";

    fn controller(transport: MockSubmitTransport) -> FormController<MockSubmitTransport> {
        FormController::new(transport, FormSettings::new(ENDPOINT))
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FieldId::FullName, "Ada Lovelace");
        form.set_value(FieldId::Email, "ada@example.com");
        form.set_value(FieldId::Message, "Planning a trip to Lisbon");
        form.set_value(FieldId::Phone, "123-456-7890");
        form
    }

    fn responding(status: u16, body: serde_json::Value) -> MockSubmitTransport {
        let mut transport = MockSubmitTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(move |_, _| Ok(ApiResponse::new(status, body.clone())));
        transport
    }

    mod field_validation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_field_toggles_error_state() {
            let controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();

            form.set_value(FieldId::FullName, "A");
            assert!(!controller.validate_field(&mut form, FieldId::FullName));
            assert!(form.has_error(FieldId::FullName));

            form.set_value(FieldId::FullName, "Al");
            assert!(controller.validate_field(&mut form, FieldId::FullName));
            assert!(!form.has_error(FieldId::FullName));
        }

        #[test]
        fn test_empty_optional_clears_error() {
            let controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();
            form.set_error_state(FieldId::Phone, true);

            assert!(controller.validate_field(&mut form, FieldId::Phone));
            assert!(!form.has_error(FieldId::Phone));
        }

        #[test]
        fn test_input_before_first_error_does_not_validate() {
            let controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();
            form.set_value(FieldId::Email, "a");

            assert_eq!(controller.handle_input(&mut form, FieldId::Email), None);
            assert!(!form.has_error(FieldId::Email));
        }

        #[test]
        fn test_blur_then_input_revalidates() {
            let controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();
            form.set_value(FieldId::Email, "ada@");

            assert!(!controller.handle_blur(&mut form, FieldId::Email));
            assert!(form.has_error(FieldId::Email));

            form.set_value(FieldId::Email, "ada@example.com");
            assert_eq!(controller.handle_input(&mut form, FieldId::Email), Some(true));
            assert!(!form.has_error(FieldId::Email));
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_form_never_hits_network() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_post_json().times(0);
            let mut controller = controller(transport);
            let mut form = ContactForm::new();

            let outcome = controller.submit(&mut form).await;

            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    first_invalid: Some(FieldId::FullName)
                }
            );
            assert_eq!(
                form.alert,
                AlertState::Error(VALIDATION_FAILED_MESSAGE.to_string())
            );
            assert!(form.has_error(FieldId::FullName));
            assert!(form.has_error(FieldId::Email));
            assert!(form.has_error(FieldId::Message));
            assert!(!form.has_error(FieldId::Company));
            assert_eq!(
                form.scrolled_to,
                Some(ScrollTarget::Field(FieldId::FullName))
            );
            assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
            assert_eq!(controller.phase(), Phase::Idle);
        }

        #[tokio::test]
        async fn test_rejection_scrolls_to_first_invalid_field() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = filled_form();
            form.set_value(FieldId::Budget, "x");

            let outcome = controller.submit(&mut form).await;

            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    first_invalid: Some(FieldId::Budget)
                }
            );
            assert_eq!(form.scrolled_to, Some(ScrollTarget::Field(FieldId::Budget)));
        }

        #[tokio::test]
        async fn test_success_clears_form_and_shows_alert() {
            let mut controller = controller(responding(200, json!({})));
            let mut form = filled_form();
            form.set_error_state(FieldId::Company, true);
            form.set_value(FieldId::Company, "Acme Travel");

            let outcome = controller.submit(&mut form).await;

            assert_eq!(outcome, SubmitOutcome::Succeeded { submission_id: None });
            assert_eq!(form.alert, AlertState::Success(SUCCESS_MESSAGE.to_string()));
            assert!(form
                .fields()
                .iter()
                .all(|f| f.value.is_empty() && !f.has_error));
            assert_eq!(
                form.scrolled_to,
                Some(ScrollTarget::Alert(AlertKind::Success))
            );
            assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
        }

        #[tokio::test]
        async fn test_success_reports_submission_id() {
            let mut controller = controller(responding(
                200,
                json!({"message": "Travel form submitted successfully", "submission_id": "4f1c"}),
            ));
            let mut form = filled_form();

            let outcome = controller.submit(&mut form).await;

            assert_eq!(
                outcome,
                SubmitOutcome::Succeeded {
                    submission_id: Some("4f1c".to_string())
                }
            );
        }

        #[tokio::test]
        async fn test_sends_payload_to_configured_endpoint() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_post_json()
                .withf(|endpoint, payload| {
                    endpoint.to_string() == ENDPOINT
                        && payload.name == "Ada Lovelace"
                        && payload.phone.as_deref() == Some("123-456-7890")
                        && payload.company.is_none()
                })
                .times(1)
                .returning(|_, _| Ok(ApiResponse::new(200, json!({}))));
            let mut controller = controller(transport);
            let mut form = filled_form();

            let outcome = controller.submit(&mut form).await;
            assert!(matches!(outcome, SubmitOutcome::Succeeded { .. }));
        }

        #[tokio::test]
        async fn test_http_error_shows_server_message() {
            let mut controller = controller(responding(400, json!({"error": "Bad input"})));
            let mut form = filled_form();

            let outcome = controller.submit(&mut form).await;

            assert_eq!(
                outcome,
                SubmitOutcome::Failed {
                    message: "❌ Error: Bad input".to_string()
                }
            );
            let message = form.alert.message().unwrap_or_default();
            assert!(message.contains("Bad input"));
            assert_eq!(form.value(FieldId::FullName), "Ada Lovelace");
            assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
        }

        #[tokio::test]
        async fn test_http_error_without_detail_uses_fallback() {
            let mut controller = controller(responding(500, json!({})));
            let mut form = filled_form();

            controller.submit(&mut form).await;

            assert_eq!(
                form.alert,
                AlertState::Error(format!("❌ Error: {SEND_FAILED_FALLBACK}"))
            );
        }

        #[tokio::test]
        async fn test_network_error_reenables_submit() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_post_json()
                .times(1)
                .returning(|_, _| Err(TransportError::Request("connection reset".to_string())));
            let mut controller = controller(transport);
            let mut form = filled_form();

            let outcome = controller.submit(&mut form).await;

            assert_eq!(outcome, SubmitOutcome::NetworkError);
            assert_eq!(
                form.alert,
                AlertState::Error(NETWORK_ERROR_MESSAGE.to_string())
            );
            assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
            assert_eq!(controller.phase(), Phase::Idle);
            assert_eq!(form.value(FieldId::Email), "ada@example.com");
        }

        #[tokio::test]
        async fn test_unparseable_body_is_network_error() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_post_json()
                .times(1)
                .returning(|_, _| Err(TransportError::Decode("expected value".to_string())));
            let mut controller = controller(transport);
            let mut form = filled_form();

            assert_eq!(controller.submit(&mut form).await, SubmitOutcome::NetworkError);
        }

        #[test]
        fn test_prepare_locks_submit_control() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = filled_form();

            let prepared = controller.prepare_submission(&mut form);

            assert!(matches!(prepared, Preparation::Ready(_)));
            assert_eq!(form.submit, SubmitControl::disabled(BUSY_LABEL));
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_second_submit_while_in_flight_is_busy() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = filled_form();

            let first = controller.prepare_submission(&mut form);
            assert!(matches!(first, Preparation::Ready(_)));

            form.show_alert(AlertKind::Error, "still here");
            let second = controller.prepare_submission(&mut form);
            assert_eq!(second, Preparation::Halted(SubmitOutcome::Busy));
            assert_eq!(form.alert, AlertState::Error("still here".to_string()));
            assert_eq!(form.submit, SubmitControl::disabled(BUSY_LABEL));
        }

        #[test]
        fn test_send_restores_original_label() {
            let mut controller = controller(responding(200, json!({})));
            let mut form = filled_form();
            form.set_submit_control(SubmitControl::enabled("Send Inquiry"));

            let Preparation::Ready(prepared) = controller.prepare_submission(&mut form) else {
                panic!("form should be valid");
            };
            tokio_test::block_on(controller.send_submission(&mut form, prepared));

            assert_eq!(form.submit, SubmitControl::enabled("Send Inquiry"));
        }

        #[test]
        fn test_invalid_form_yields_nothing_to_send() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_post_json().times(0);
            let mut controller = controller(transport);
            let mut form = ContactForm::new();

            let prepared = controller.prepare_submission(&mut form);

            assert!(matches!(prepared, Preparation::Halted(SubmitOutcome::Rejected { .. })));
            assert_eq!(controller.phase(), Phase::Idle);
            assert_eq!(form.submit, SubmitControl::enabled(SUBMIT_LABEL));
        }

        #[test]
        fn test_prepared_submission_holds_validated_payload() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = filled_form();

            let Preparation::Ready(prepared) = controller.prepare_submission(&mut form) else {
                panic!("form should be valid");
            };

            assert_eq!(prepared.payload, SubmissionPayload::from_host(&form));
            assert_eq!(prepared.restore_label, SUBMIT_LABEL);
        }

        #[tokio::test]
        async fn test_submit_clears_previous_alert() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();
            form.show_alert(AlertKind::Success, "old");

            controller.submit(&mut form).await;

            assert_eq!(
                form.alert,
                AlertState::Error(VALIDATION_FAILED_MESSAGE.to_string())
            );
        }
    }

    mod alert_timer_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_alert_hides_after_five_seconds() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();

            controller.submit(&mut form).await;
            assert!(form.alert.is_visible());

            tokio::time::advance(Duration::from_millis(4999)).await;
            assert!(!controller.tick(&mut form));
            assert!(form.alert.is_visible());

            tokio::time::advance(Duration::from_millis(1)).await;
            assert!(controller.tick(&mut form));
            assert_eq!(form.alert, AlertState::Hidden);
            assert!(controller.alert_timer.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_alert_hides_after_five_seconds() {
            let mut controller = controller(responding(200, json!({})));
            let mut form = filled_form();

            controller.submit(&mut form).await;
            tokio::time::advance(Duration::from_secs(5)).await;

            assert!(controller.tick(&mut form));
            assert_eq!(form.alert, AlertState::Hidden);
        }

        #[tokio::test(start_paused = true)]
        async fn test_newer_alert_is_not_hidden_by_stale_timer() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_post_json()
                .times(1)
                .returning(|_, _| Err(TransportError::Request("timed out".to_string())));
            let mut controller = controller(transport);
            let mut form = ContactForm::new();

            // Validation alert at t=0
            controller.submit(&mut form).await;

            // Network error alert at t=3s
            tokio::time::advance(Duration::from_secs(3)).await;
            form.set_value(FieldId::FullName, "Ada Lovelace");
            form.set_value(FieldId::Email, "ada@example.com");
            form.set_value(FieldId::Message, "Hello there");
            controller.submit(&mut form).await;

            // The first alert's deadline passes, the new alert stays
            tokio::time::advance(Duration::from_secs(3)).await;
            assert!(!controller.tick(&mut form));
            assert_eq!(
                form.alert,
                AlertState::Error(NETWORK_ERROR_MESSAGE.to_string())
            );

            tokio::time::advance(Duration::from_secs(2)).await;
            assert!(controller.tick(&mut form));
            assert_eq!(form.alert, AlertState::Hidden);
        }

        #[tokio::test(start_paused = true)]
        async fn test_dismiss_cancels_timer() {
            let mut controller = controller(MockSubmitTransport::new());
            let mut form = ContactForm::new();

            controller.submit(&mut form).await;
            controller.dismiss_alerts(&mut form);
            assert!(controller.alert_timer.is_none());

            form.show_alert(AlertKind::Success, "shown by someone else");
            tokio::time::advance(Duration::from_secs(10)).await;
            assert!(!controller.tick(&mut form));
            assert!(form.alert.is_visible());
        }

        #[tokio::test(start_paused = true)]
        async fn test_configured_timeout_is_used() {
            let settings = FormSettings {
                api_url: ENDPOINT.to_string(),
                alert_timeout: Duration::from_secs(2),
            };
            let mut controller = FormController::new(MockSubmitTransport::new(), settings);
            let mut form = ContactForm::new();

            controller.submit(&mut form).await;
            tokio::time::advance(Duration::from_secs(2)).await;
            assert!(controller.tick(&mut form));
        }
    }
}
