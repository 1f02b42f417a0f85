//! Notification: a transient, dismissible message reporting the outcome of
//! a user action.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::NotificationId;

/// Severity tag of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    /// CSS class of the alert box (`alert-success`, `alert-danger`).
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Danger => f.write_str("danger"),
        }
    }
}

/// A single message in the notification stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification with a fresh id, stamped with the current time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Change to the notification stack, broadcast to front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A notification was pushed on top of the stack.
    Shown(Notification),
    /// A notification left the stack (expired or dismissed).
    Dismissed(NotificationId),
}
