//! In-memory port fakes shared by the service tests.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use easypanel_domain::action::{CommandResult, ServiceAction};
use easypanel_domain::badge::StatusBadge;
use easypanel_domain::binding::{Binding, BindingKind};
use easypanel_domain::error::PanelError;
use easypanel_domain::id::NotificationId;
use easypanel_domain::notification::Severity;
use easypanel_domain::service::ServiceStatusSnapshot;
use easypanel_domain::stats::SystemStatSnapshot;

use crate::ports::{BindingResolver, Confirmer, ElementHandle, Notifier, PanelApi};

pub fn connection_refused() -> PanelError {
    PanelError::Transport(Box::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    )))
}

/// Scriptable panel. `None` responses fail with "connection refused".
#[derive(Default)]
pub struct FakeApi {
    pub services: Mutex<Option<ServiceStatusSnapshot>>,
    /// Delayed service responses consumed before falling back to `services`.
    pub delayed_services: Mutex<VecDeque<(Duration, ServiceStatusSnapshot)>>,
    pub stats: Mutex<Option<SystemStatSnapshot>>,
    pub command: Mutex<Option<CommandResult>>,
    pub service_calls: AtomicUsize,
    pub stat_calls: AtomicUsize,
    pub commands: Mutex<Vec<(String, ServiceAction)>>,
}

impl FakeApi {
    pub fn with_services(snapshot: ServiceStatusSnapshot) -> Self {
        let api = Self::default();
        *api.services.lock().unwrap() = Some(snapshot);
        api
    }

    pub fn set_services(&self, snapshot: Option<ServiceStatusSnapshot>) {
        *self.services.lock().unwrap() = snapshot;
    }

    pub fn set_stats(&self, snapshot: Option<SystemStatSnapshot>) {
        *self.stats.lock().unwrap() = snapshot;
    }

    pub fn set_command(&self, result: Option<CommandResult>) {
        *self.command.lock().unwrap() = result;
    }

    pub fn service_calls(&self) -> usize {
        self.service_calls.load(Ordering::SeqCst)
    }

    pub fn stat_calls(&self) -> usize {
        self.stat_calls.load(Ordering::SeqCst)
    }

    pub fn command_calls(&self) -> usize {
        self.commands.lock().unwrap().len()
    }
}

impl PanelApi for FakeApi {
    fn service_statuses(
        &self,
    ) -> impl Future<Output = Result<ServiceStatusSnapshot, PanelError>> + Send {
        self.service_calls.fetch_add(1, Ordering::SeqCst);
        let delayed = self.delayed_services.lock().unwrap().pop_front();
        let fallback = self.services.lock().unwrap().clone();
        async move {
            match delayed {
                Some((delay, snapshot)) => {
                    tokio::time::sleep(delay).await;
                    Ok(snapshot)
                }
                None => fallback.ok_or_else(connection_refused),
            }
        }
    }

    fn system_stats(&self) -> impl Future<Output = Result<SystemStatSnapshot, PanelError>> + Send {
        self.stat_calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .stats
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(connection_refused);
        async move { result }
    }

    fn send_command(
        &self,
        name: &str,
        action: ServiceAction,
    ) -> impl Future<Output = Result<CommandResult, PanelError>> + Send {
        self.commands
            .lock()
            .unwrap()
            .push((name.to_string(), action));
        let result = self
            .command
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(connection_refused);
        async move { result }
    }
}

/// What a bound element currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub class: String,
}

/// In-memory view: a fixed set of bound elements.
#[derive(Clone, Default)]
pub struct FakeView {
    elements: Arc<Mutex<HashMap<Binding, Rendered>>>,
}

impl FakeView {
    pub fn with(bindings: impl IntoIterator<Item = Binding>) -> Self {
        let view = Self::default();
        {
            let mut elements = view.elements.lock().unwrap();
            for binding in bindings {
                elements.insert(binding, Rendered::default());
            }
        }
        view
    }

    pub fn get(&self, binding: &Binding) -> Option<Rendered> {
        self.elements.lock().unwrap().get(binding).cloned()
    }

    pub fn state(&self) -> HashMap<Binding, Rendered> {
        self.elements.lock().unwrap().clone()
    }
}

pub struct FakeElement {
    elements: Arc<Mutex<HashMap<Binding, Rendered>>>,
    binding: Binding,
}

impl ElementHandle for FakeElement {
    fn set_badge(&self, badge: StatusBadge) {
        let mut elements = self.elements.lock().unwrap();
        let element = elements.entry(self.binding.clone()).or_default();
        element.class = badge.class_name();
        element.text = badge.label.to_string();
    }

    fn set_text(&self, text: &str) {
        let mut elements = self.elements.lock().unwrap();
        elements.entry(self.binding.clone()).or_default().text = text.to_string();
    }
}

impl BindingResolver for FakeView {
    type Element = FakeElement;

    fn resolve(&self, binding: &Binding) -> Option<FakeElement> {
        self.elements
            .lock()
            .unwrap()
            .contains_key(binding)
            .then(|| FakeElement {
                elements: Arc::clone(&self.elements),
                binding: binding.clone(),
            })
    }

    fn has_bindings(&self, kind: BindingKind) -> bool {
        self.elements.lock().unwrap().keys().any(|b| b.kind == kind)
    }
}

/// Answers every prompt with a fixed value and records the prompts.
#[derive(Default)]
pub struct FixedAnswer {
    pub answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl FixedAnswer {
    pub fn yes() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn no() -> Self {
        Self::default()
    }
}

impl Confirmer for FixedAnswer {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let answer = self.answer;
        async move { answer }
    }
}

/// Records every notification instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<(Severity, String)> {
        self.shown.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: String) -> NotificationId {
        self.shown.lock().unwrap().push((severity, message));
        NotificationId::new()
    }
}
