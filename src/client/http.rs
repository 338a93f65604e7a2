//! HTTP transport for the submission endpoint

use super::traits::{ApiResponse, SubmitTransport, TransportError};
use crate::controller::SubmissionPayload;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

/// User agent sent with every submission
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for posting form submissions over HTTP
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}
