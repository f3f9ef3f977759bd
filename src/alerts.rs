//! User-facing alerts raised by operation completions.

use std::time::{Duration, Instant};

/// How long success alerts stay up before they dismiss themselves.
pub const SUCCESS_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
    pub dismissible: bool,
    /// `None` keeps the alert until it is dismissed.
    pub auto_dismiss: Option<Duration>,
    pub raised_at: Instant,
}

impl Alert {
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        auto_dismiss: Option<Duration>,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            dismissible: true,
            auto_dismiss,
            raised_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, Some(SUCCESS_TIMEOUT))
    }

    /// Errors stay until explicitly dismissed.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger, None)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.auto_dismiss
            .is_some_and(|ttl| now.saturating_duration_since(self.raised_at) >= ttl)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPolicy {
    /// Each new alert replaces whatever is showing.
    Single,
    /// Alerts accumulate, oldest dropped beyond `max`.
    Queue { max: usize },
}

impl AlertPolicy {
    pub fn from_queue_len(len: Option<usize>) -> Self {
        match len {
            Some(max) if max > 1 => AlertPolicy::Queue { max },
            _ => AlertPolicy::Single,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AlertBoard {
    policy: AlertPolicy,
    alerts: Vec<Alert>,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(AlertPolicy::Single)
    }
}

impl AlertBoard {
    pub fn new(policy: AlertPolicy) -> Self {
        Self {
            policy,
            alerts: Vec::new(),
        }
    }

    pub fn push(&mut self, alert: Alert) {
        match alert.severity {
            Severity::Success => tracing::info!(message = %alert.message, "alert"),
            Severity::Danger => tracing::warn!(message = %alert.message, "alert"),
        }
        match self.policy {
            AlertPolicy::Single => {
                self.alerts.clear();
                self.alerts.push(alert);
            }
            AlertPolicy::Queue { max } => {
                self.alerts.push(alert);
                let overflow = self.alerts.len().saturating_sub(max);
                self.alerts.drain(..overflow);
            }
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Alert::success(message));
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.push(Alert::danger(message));
    }

    /// Removes the alert at `index` if it is dismissible.
    pub fn dismiss(&mut self, index: usize) -> Option<Alert> {
        if self.alerts.get(index).is_some_and(|a| a.dismissible) {
            Some(self.alerts.remove(index))
        } else {
            None
        }
    }

    /// Drops alerts whose auto-dismiss delay has elapsed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.alerts.len();
        self.alerts.retain(|a| !a.is_expired(now));
        before - self.alerts.len()
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    pub fn latest(&self) -> Option<&Alert> {
        self.alerts.last()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/alerts_tests.rs"]
mod tests;
