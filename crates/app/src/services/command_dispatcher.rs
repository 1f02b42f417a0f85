//! Command dispatcher: sends start/stop/restart for a named service and
//! reports the outcome.
//!
//! Every confirmed invocation produces exactly one notification. A success
//! also triggers one extra service status poll so the view catches up
//! without waiting for the next timer tick. Nothing is retried and requests
//! have no timeout of their own: a hung request leaves the view stale until
//! the adapter gives up.

use std::sync::Arc;

use easypanel_domain::action::ServiceAction;
use easypanel_domain::notification::Severity;
use easypanel_domain::service::validate_service_name;

use crate::ports::{BindingResolver, Confirmer, Notifier, PanelApi};
use crate::services::status_poller::StatusPoller;

/// Which path a dispatch took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The panel accepted the command.
    Succeeded,
    /// The panel answered `success: false` with this message.
    Rejected(String),
    /// The request did not complete.
    Failed(String),
    /// The user declined the confirmation prompt. Nothing was sent.
    Cancelled,
    /// The service name cannot be used in a request path. Nothing was sent.
    Invalid,
}

/// Sends service commands and surfaces their outcome.
pub struct CommandDispatcher<A, R, C, N> {
    poller: Arc<StatusPoller<A, R>>,
    confirmer: C,
    notifier: N,
}

impl<A, R, C, N> CommandDispatcher<A, R, C, N>
where
    A: PanelApi,
    R: BindingResolver,
    C: Confirmer,
    N: Notifier,
{
    /// Create a dispatcher that re-polls through `poller`'s API and view.
    pub fn new(poller: Arc<StatusPoller<A, R>>, confirmer: C, notifier: N) -> Self {
        Self {
            poller,
            confirmer,
            notifier,
        }
    }

    pub async fn start(&self, name: &str) -> DispatchOutcome {
        self.dispatch(name, ServiceAction::Start).await
    }

    /// Stop a service after the user confirmed it.
    pub async fn stop(&self, name: &str) -> DispatchOutcome {
        self.dispatch(name, ServiceAction::Stop).await
    }

    pub async fn restart(&self, name: &str) -> DispatchOutcome {
        self.dispatch(name, ServiceAction::Restart).await
    }

    /// Send `action` for service `name`.
    ///
    /// Actions that require confirmation ask the [`Confirmer`] first; a
    /// declined prompt sends nothing and shows nothing.
    pub async fn dispatch(&self, name: &str, action: ServiceAction) -> DispatchOutcome {
        if let Err(err) = validate_service_name(name) {
            tracing::warn!(service = name, %action, error = %err, "refusing to dispatch");
            self.notifier.notify(Severity::Danger, err.to_string());
            return DispatchOutcome::Invalid;
        }

        if action.requires_confirmation()
            && !self
                .confirmer
                .confirm(&action.confirmation_prompt(name))
                .await
        {
            tracing::debug!(service = name, %action, "command cancelled by user");
            return DispatchOutcome::Cancelled;
        }

        match self.poller.api().send_command(name, action).await {
            Ok(result) if result.success => {
                tracing::info!(service = name, %action, message = %result.message, "command succeeded");
                self.notifier
                    .notify(Severity::Success, action.success_message(name));
                let _ = self.poller.refresh_services().await;
                DispatchOutcome::Succeeded
            }
            Ok(result) => {
                tracing::info!(service = name, %action, message = %result.message, "command rejected");
                self.notifier.notify(
                    Severity::Danger,
                    action.rejection_message(name, &result.message),
                );
                DispatchOutcome::Rejected(result.message)
            }
            Err(err) => {
                let error = err.to_string();
                tracing::warn!(service = name, %action, %error, "command request failed");
                self.notifier.notify(
                    Severity::Danger,
                    action.transport_failure_message(name, &error),
                );
                DispatchOutcome::Failed(error)
            }
        }
    }
}
