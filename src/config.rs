//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint used when nothing is configured. Posting to it always fails.
pub const API_URL_PLACEHOLDER: &str = "YOUR_API_GATEWAY_URL_PLACEHOLDER";

/// Environment variable carrying the deployed endpoint URL
pub const API_URL_ENV: &str = "TRAVELEASE_API_URL";

/// How long an alert stays up before it hides itself
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Submission endpoint URL
    pub api_url: Option<String>,
    /// Seconds before an alert auto-hides
    pub alert_timeout_secs: Option<u64>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "travelease", "travelease-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file, then apply the environment
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        Ok(config.with_env_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override the endpoint with an injected value when one is present
    pub fn with_env_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    /// Resolve into the settings handed to the form controller
    pub fn resolve(&self) -> FormSettings {
        let api_url = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(API_URL_PLACEHOLDER)
            .to_string();

        let alert_timeout = self
            .alert_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_ALERT_TIMEOUT);

        let settings = FormSettings {
            api_url,
            alert_timeout,
        };

        if !settings.is_configured() {
            tracing::warn!("API URL not configured. Form submissions will fail.");
        }

        settings
    }
}

/// Resolved settings injected into the form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub api_url: String,
    pub alert_timeout: Duration,
}

impl FormSettings {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            alert_timeout: DEFAULT_ALERT_TIMEOUT,
        }
    }

    /// False while the endpoint is still the placeholder
    pub fn is_configured(&self) -> bool {
        self.api_url != API_URL_PLACEHOLDER
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::new(API_URL_PLACEHOLDER)
    }
}
