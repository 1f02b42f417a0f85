//! Notifier port: surfaces the outcome of a user action.

use std::sync::Arc;

use easypanel_domain::id::NotificationId;
use easypanel_domain::notification::Severity;

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Show `message` tagged with `severity`.
    fn notify(&self, severity: Severity, message: String) -> NotificationId;
}

impl<T: Notifier> Notifier for Arc<T> {
    fn notify(&self, severity: Severity, message: String) -> NotificationId {
        (**self).notify(severity, message)
    }
}
