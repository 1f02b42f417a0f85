//! Status poller: fetches the status snapshots on fixed timers and renders
//! them into the bound elements.
//!
//! Each tick fires its request in its own task, so a slow response is not
//! awaited before the next tick. Responses are not ordered: whichever
//! resolves last is what the view shows. Rendering is idempotent, so this
//! only matters when the panel state changes between two overlapping polls.

use std::sync::Arc;
use std::time::Duration;

use easypanel_domain::binding::{Binding, BindingKind};
use easypanel_domain::error::PanelError;
use easypanel_domain::service::ServiceStatus;
use easypanel_domain::stats::SystemStatSnapshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::ports::{BindingResolver, ElementHandle, PanelApi};

/// Timer periods for the two polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub services: Duration,
    pub stats: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            services: Duration::from_secs(30),
            stats: Duration::from_secs(10),
        }
    }
}

/// How many snapshot entries found a bound element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Entries rendered into an element.
    pub applied: usize,
    /// Entries with no bound element, skipped silently.
    pub skipped: usize,
}

/// Polls the panel and reconciles snapshots into the view.
pub struct StatusPoller<A, R> {
    api: A,
    resolver: R,
    intervals: PollIntervals,
}

impl<A: PanelApi, R: BindingResolver> StatusPoller<A, R> {
    pub fn new(api: A, resolver: R, intervals: PollIntervals) -> Self {
        Self {
            api,
            resolver,
            intervals,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Fetch the service status snapshot once and render it.
    ///
    /// On failure the view is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error reported by the [`PanelApi`].
    pub async fn refresh_services(&self) -> Result<PollOutcome, PanelError> {
        let snapshot = self
            .api
            .service_statuses()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to refresh service status"))?;
        let outcome = self.render_services(&snapshot);
        tracing::debug!(
            applied = outcome.applied,
            skipped = outcome.skipped,
            "service status refreshed"
        );
        Ok(outcome)
    }

    /// Fetch the system stat snapshot once and render it.
    ///
    /// On failure the view is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error reported by the [`PanelApi`].
    pub async fn refresh_stats(&self) -> Result<PollOutcome, PanelError> {
        let snapshot = self
            .api
            .system_stats()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to refresh system stats"))?;
        let outcome = self.render_stats(&snapshot);
        tracing::debug!(
            applied = outcome.applied,
            skipped = outcome.skipped,
            "system stats refreshed"
        );
        Ok(outcome)
    }

    /// Render each service's badge into its bound element.
    pub fn render_services(&self, snapshot: &[ServiceStatus]) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        for service in snapshot {
            match self.resolver.resolve(&Binding::service(service.name.as_str())) {
                Some(element) => {
                    element.set_badge(service.state().badge());
                    outcome.applied += 1;
                }
                None => outcome.skipped += 1,
            }
        }
        outcome
    }

    /// Render each stat's display text into its bound element.
    pub fn render_stats(&self, snapshot: &SystemStatSnapshot) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        for (key, text) in snapshot.display_entries() {
            match self.resolver.resolve(&Binding::stat(key)) {
                Some(element) => {
                    element.set_text(&text);
                    outcome.applied += 1;
                }
                None => outcome.skipped += 1,
            }
        }
        outcome
    }
}

impl<A, R> StatusPoller<A, R>
where
    A: PanelApi + 'static,
    R: BindingResolver + 'static,
{
    /// Start the repeating timers.
    ///
    /// A timer only runs when the view has at least one binding of its kind.
    /// The first poll happens one full period after starting. Polling stops
    /// when the returned handle is stopped or dropped.
    pub fn start(self: Arc<Self>) -> PollerHandle {
        let mut tasks = Vec::with_capacity(2);

        if self.resolver.has_bindings(BindingKind::ServiceStatus) {
            let poller = Arc::clone(&self);
            tasks.push(tokio::spawn(async move {
                let mut ticker = ticker(poller.intervals.services);
                loop {
                    ticker.tick().await;
                    let poller = Arc::clone(&poller);
                    tokio::spawn(async move {
                        let _ = poller.refresh_services().await;
                    });
                }
            }));
        }

        if self.resolver.has_bindings(BindingKind::Stat) {
            let poller = Arc::clone(&self);
            tasks.push(tokio::spawn(async move {
                let mut ticker = ticker(poller.intervals.stats);
                loop {
                    ticker.tick().await;
                    let poller = Arc::clone(&poller);
                    tokio::spawn(async move {
                        let _ = poller.refresh_stats().await;
                    });
                }
            }));
        }

        tracing::debug!(timers = tasks.len(), "status poller started");
        PollerHandle { tasks }
    }
}

fn ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Running poll timers. Dropping the handle stops them.
///
/// Requests already in flight are allowed to finish.
#[must_use = "polling stops when the handle is dropped"]
pub struct PollerHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl PollerHandle {
    /// Cancel both timers. Calling it again is a no-op.
    pub fn stop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Number of active timers (0, 1 or 2).
    #[must_use]
    pub fn timers(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
