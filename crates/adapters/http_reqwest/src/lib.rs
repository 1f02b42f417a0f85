//! # easypanel-adapter-http-reqwest
//!
//! Implements the [`PanelApi`] port over HTTP with `reqwest`.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `service_statuses` | `GET /api/services/status` |
//! | `system_stats` | `GET /api/system/stats` |
//! | `send_command` | `POST /api/services/{name}/{action}` with `Content-Type: application/json` |
//!
//! ## Dependency rule
//!
//! Depends on `easypanel-app` (port traits) and `easypanel-domain` only.

pub mod config;
pub mod error;

use easypanel_app::ports::PanelApi;
use easypanel_domain::action::{CommandResult, ServiceAction};
use easypanel_domain::error::PanelError;
use easypanel_domain::service::ServiceStatusSnapshot;
use easypanel_domain::stats::SystemStatSnapshot;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

pub use config::HttpConfig;
pub use error::HttpError;

const SERVICE_STATUS_PATH: &str = "/api/services/status";
const SYSTEM_STATS_PATH: &str = "/api/system/stats";

/// [`PanelApi`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestPanelApi {
    client: Client,
    base_url: String,
}

impl ReqwestPanelApi {
    /// Wrap `client`, sending every request relative to `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(%url, "polling panel");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(HttpError::Decode)
    }

    /// `{base}/api/services/{name}/{action}`, with `name` percent-encoded as
    /// a single path segment.
    fn command_url(&self, name: &str, action: ServiceAction) -> Result<Url, HttpError> {
        let invalid = |reason: String| HttpError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api", "services", name, action.as_str()]);
        Ok(url)
    }

    async fn post_command(
        &self,
        name: &str,
        action: ServiceAction,
    ) -> Result<CommandResult, HttpError> {
        let url = self.command_url(name, action)?;
        tracing::debug!(%url, "sending service command");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        // an error status still carries the panel's envelope when it has one
        match serde_json::from_slice::<CommandResult>(&body) {
            Ok(result) => Ok(result),
            Err(_) if !status.is_success() => Err(HttpError::Status(status.as_u16())),
            Err(err) => Err(HttpError::Decode(err)),
        }
    }
}

impl PanelApi for ReqwestPanelApi {
    async fn service_statuses(&self) -> Result<ServiceStatusSnapshot, PanelError> {
        Ok(self.get_json(SERVICE_STATUS_PATH).await?)
    }

    async fn system_stats(&self) -> Result<SystemStatSnapshot, PanelError> {
        Ok(self.get_json(SYSTEM_STATS_PATH).await?)
    }

    async fn send_command(
        &self,
        name: &str,
        action: ServiceAction,
    ) -> Result<CommandResult, PanelError> {
        Ok(self.post_command(name, action).await?)
    }
}
