//! User-facing notifications.
//!
//! Every operation outcome the user should see goes through a
//! [`NotificationSink`]. The session never panics or silently drops a
//! failure; it reports and carries on.

use std::fmt;

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single notification: a short title plus a longer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Destination for notifications. A UI layer shows toasts; tests record.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the tracing subscriber.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(title = %notification.title, "{}", notification.message),
            Severity::Error => error!(title = %notification.title, "{}", notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert!(Notification::error("Upload failed", "boom").is_error());
        assert!(!Notification::info("File uploaded", "ok").is_error());
    }

    #[test]
    fn test_display() {
        let n = Notification::info("Credentials loaded", "ready");
        assert_eq!(n.to_string(), "Credentials loaded: ready");
    }
}
