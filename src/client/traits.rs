//! Trait abstraction for the submission transport to enable mocking in tests

use crate::controller::SubmissionPayload;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A request that never produced a usable response
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped
    #[error("request failed: {0}")]
    Request(String),
    /// The response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Status and parsed JSON body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Server-supplied `error` string, if present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Reference id the server assigns to an accepted submission
    pub fn submission_id(&self) -> Option<&str> {
        self.body.get("submission_id").and_then(Value::as_str)
    }
}

/// Sends a submission to the configured endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// POST the payload as JSON and parse the JSON response body
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<ApiResponse, TransportError>;
}
