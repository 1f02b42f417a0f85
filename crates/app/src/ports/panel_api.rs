//! Panel API port: the HTTP endpoints exposed by the panel server.

use std::future::Future;
use std::sync::Arc;

use easypanel_domain::action::{CommandResult, ServiceAction};
use easypanel_domain::error::PanelError;
use easypanel_domain::service::ServiceStatusSnapshot;
use easypanel_domain::stats::SystemStatSnapshot;

/// Read and command access to a running panel.
///
/// Implementations report a request that never completed, or a body that
/// could not be decoded, as an `Err`. An application-level refusal
/// (`success: false`) is an `Ok` [`CommandResult`].
pub trait PanelApi: Send + Sync {
    /// `GET /api/services/status`
    fn service_statuses(
        &self,
    ) -> impl Future<Output = Result<ServiceStatusSnapshot, PanelError>> + Send;

    /// `GET /api/system/stats`
    fn system_stats(&self) -> impl Future<Output = Result<SystemStatSnapshot, PanelError>> + Send;

    /// `POST /api/services/{name}/{action}`
    fn send_command(
        &self,
        name: &str,
        action: ServiceAction,
    ) -> impl Future<Output = Result<CommandResult, PanelError>> + Send;
}

impl<T: PanelApi> PanelApi for Arc<T> {
    fn service_statuses(
        &self,
    ) -> impl Future<Output = Result<ServiceStatusSnapshot, PanelError>> + Send {
        (**self).service_statuses()
    }

    fn system_stats(&self) -> impl Future<Output = Result<SystemStatSnapshot, PanelError>> + Send {
        (**self).system_stats()
    }

    fn send_command(
        &self,
        name: &str,
        action: ServiceAction,
    ) -> impl Future<Output = Result<CommandResult, PanelError>> + Send {
        (**self).send_command(name, action)
    }
}
