//! Notification center: a stack of auto-dismissing messages.
//!
//! New notifications go on top. Each one schedules its own removal after a
//! fixed delay; dismissing it earlier removes it at once and cancels that
//! removal. Front-ends either read [`NotificationCenter::active`] or follow
//! changes through [`NotificationCenter::subscribe`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use easypanel_domain::id::NotificationId;
use easypanel_domain::notification::{Notification, NotificationEvent, Severity};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::ports::Notifier;

/// Default time a notification stays visible.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

const EVENT_CAPACITY: usize = 64;

struct Entry {
    notification: Notification,
    expiry: JoinHandle<()>,
}

struct Inner {
    entries: Mutex<Vec<Entry>>,
    dismiss_after: Duration,
    sender: broadcast::Sender<NotificationEvent>,
}

impl Inner {
    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove `id` from the stack; `cancel` aborts its pending expiry.
    ///
    /// Events are sent under the entries lock so subscribers see them in
    /// the order the stack changed.
    fn remove(&self, id: NotificationId, cancel: bool) -> bool {
        let mut entries = self.entries();
        let Some(index) = entries
            .iter()
            .position(|entry| entry.notification.id == id)
        else {
            return false;
        };
        let entry = entries.remove(index);
        if cancel {
            entry.expiry.abort();
        }
        // no receivers is fine
        let _ = self.sender.send(NotificationEvent::Dismissed(id));
        true
    }
}

/// Stackable, auto-dismissing notification surface.
///
/// Cloning is cheap and every clone shares the same stack. Must be used
/// from within a tokio runtime, since each notification spawns its expiry
/// timer.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl NotificationCenter {
    /// Create an empty stack whose notifications expire after `dismiss_after`.
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                dismiss_after,
                sender,
            }),
        }
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.inner.dismiss_after
    }

    /// Push a notification on top of the stack and schedule its removal.
    pub fn push(&self, severity: Severity, message: impl Into<String>) -> NotificationId {
        let notification = Notification::new(severity, message);
        let id = notification.id;

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.dismiss_after;
        // the expiry task blocks on this lock until the entry is in place
        let mut entries = self.inner.entries();
        let expiry = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.remove(id, false);
            }
        });
        entries.insert(
            0,
            Entry {
                notification: notification.clone(),
                expiry,
            },
        );
        let _ = self
            .inner
            .sender
            .send(NotificationEvent::Shown(notification));
        drop(entries);

        tracing::debug!(%id, %severity, "notification shown");
        id
    }

    /// Remove a notification now and cancel its scheduled removal.
    ///
    /// Returns `false` when `id` is not (or no longer) on the stack.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.remove(id, true)
    }

    /// Current notifications, newest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.inner
            .entries()
            .iter()
            .map(|entry| entry.notification.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries().is_empty()
    }

    /// Follow stack changes made *after* the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.inner.sender.subscribe()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, severity: Severity, message: String) -> NotificationId {
        self.push(severity, message)
    }
}
