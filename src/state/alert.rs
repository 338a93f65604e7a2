//! Alert banner state and the auto-hide timer

use tokio::time::Instant;

/// Which alert container a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// What the alert banner currently shows. Only one alert is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl AlertState {
    pub fn shown(kind: AlertKind, message: impl Into<String>) -> Self {
        match kind {
            AlertKind::Success => AlertState::Success(message.into()),
            AlertKind::Error => AlertState::Error(message.into()),
        }
    }

    pub fn kind(&self) -> Option<AlertKind> {
        match self {
            AlertState::Hidden => None,
            AlertState::Success(_) => Some(AlertKind::Success),
            AlertState::Error(_) => Some(AlertKind::Error),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            AlertState::Hidden => None,
            AlertState::Success(m) | AlertState::Error(m) => Some(m),
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        !matches!(self, AlertState::Hidden)
    }
}

/// The one pending auto-hide for the alert banner
#[derive(Debug, Clone, Copy)]
pub struct AlertTimer {
    pub kind: AlertKind,
    pub deadline: Instant,
}

impl AlertTimer {
    pub fn new(kind: AlertKind, deadline: Instant) -> Self {
        Self { kind, deadline }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
