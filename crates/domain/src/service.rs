//! Service status: what the status endpoint reports for each named service.

use serde::{Deserialize, Serialize};

use crate::badge::StatusBadge;
use crate::error::ValidationError;

/// Normalised operational state of a service.
///
/// The panel reports free-form strings; [`ServiceState::parse`] folds them
/// into the four states the UI knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceState {
    Running,
    Stopped,
    Starting,
    #[default]
    Unknown,
}

impl ServiceState {
    /// Parse a raw status string, ignoring case.
    ///
    /// `running`/`active`, `stopped`/`inactive` and `loading`/`starting` are
    /// recognised; everything else is [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "running" | "active" => Self::Running,
            "stopped" | "inactive" => Self::Stopped,
            "loading" | "starting" => Self::Starting,
            _ => Self::Unknown,
        }
    }

    /// Badge shown for this state.
    #[must_use]
    pub fn badge(self) -> StatusBadge {
        match self {
            Self::Running => StatusBadge::RUNNING,
            Self::Stopped => StatusBadge::STOPPED,
            Self::Starting => StatusBadge::STARTING,
            Self::Unknown => StatusBadge::UNKNOWN,
        }
    }
}

/// One entry of the service status snapshot, as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
}

impl ServiceStatus {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ServiceState {
        ServiceState::parse(&self.status)
    }
}

/// Ordered list of service statuses returned by `GET /api/services/status`.
pub type ServiceStatusSnapshot = Vec<ServiceStatus>;

/// Check that `name` can be spliced into `/api/services/{name}/{action}`.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyServiceName`] for an empty name and
/// [`ValidationError::InvalidServiceName`] when the name is a dot segment
/// (`.` or `..`), or contains a path, query or fragment delimiter, a
/// percent escape, whitespace or a control character.
pub fn validate_service_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyServiceName);
    }
    // URL parsers collapse dot segments and treat `\` as `/` in http URLs
    let dot_segment = matches!(name, "." | "..");
    if dot_segment
        || name.chars().any(|c| {
            matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
        })
    {
        return Err(ValidationError::InvalidServiceName {
            name: name.to_string(),
        });
    }
    Ok(())
}
