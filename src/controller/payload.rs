//! JSON body sent to the submission endpoint

use super::host::FormHost;
use crate::state::FieldId;
use serde::{Deserialize, Serialize};

/// Submission body. Optional answers left empty are sent as `null`, never
/// omitted and never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub travelease_dates: Option<String>,
    pub budget: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl SubmissionPayload {
    /// Read the current field values from the host
    pub fn from_host<H: FormHost + ?Sized>(host: &H) -> Self {
        Self {
            name: host.value(FieldId::FullName).to_string(),
            email: host.value(FieldId::Email).to_string(),
            message: host.value(FieldId::Message).to_string(),
            company: optional(host.value(FieldId::Company)),
            phone: optional(host.value(FieldId::Phone)),
            subject: optional(host.value(FieldId::Subject)),
            travelease_dates: optional(host.value(FieldId::TravelDates)),
            budget: optional(host.value(FieldId::Budget)),
        }
    }
}
