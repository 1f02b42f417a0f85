//! Service actions and the command result envelope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Imperative control command for a named service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    /// Last path segment of `/api/services/{name}/{action}`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Restart => "restarted",
        }
    }

    #[must_use]
    pub fn present_participle(self) -> &'static str {
        match self {
            Self::Start => "starting",
            Self::Stop => "stopping",
            Self::Restart => "restarting",
        }
    }

    /// Only stopping a service asks the user first.
    #[must_use]
    pub fn requires_confirmation(self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Message shown when the panel accepted the command.
    #[must_use]
    pub fn success_message(self, name: &str) -> String {
        format!("{name} {} successfully", self.past_tense())
    }

    /// Message shown when the panel answered `success: false`.
    #[must_use]
    pub fn rejection_message(self, name: &str, reason: &str) -> String {
        format!("Failed to {self} {name}: {reason}")
    }

    /// Message shown when the request itself failed.
    #[must_use]
    pub fn transport_failure_message(self, name: &str, error: &str) -> String {
        format!("Error {} {name}: {error}", self.present_participle())
    }

    #[must_use]
    pub fn confirmation_prompt(self, name: &str) -> String {
        format!("Are you sure you want to {self} {name}?")
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service action {0:?}, expected start, stop or restart")]
pub struct UnknownAction(pub String);

impl FromStr for ServiceAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "restart" => Ok(Self::Restart),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Envelope returned by every `POST /api/services/{name}/{action}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_require_confirmation_for_stop() {
        assert!(ServiceAction::Stop.requires_confirmation());
        assert!(!ServiceAction::Start.requires_confirmation());
        assert!(!ServiceAction::Restart.requires_confirmation());
    }

    #[test]
    fn should_template_messages_per_action() {
        assert_eq!(
            ServiceAction::Start.success_message("nginx"),
            "nginx started successfully"
        );
        assert_eq!(
            ServiceAction::Restart.rejection_message("redis", "port busy"),
            "Failed to restart redis: port busy"
        );
        assert_eq!(
            ServiceAction::Stop.transport_failure_message("mysql", "timed out"),
            "Error stopping mysql: timed out"
        );
        assert_eq!(
            ServiceAction::Stop.confirmation_prompt("mysql"),
            "Are you sure you want to stop mysql?"
        );
    }

    #[test]
    fn should_parse_lowercase_action_names() {
        assert_eq!("restart".parse::<ServiceAction>(), Ok(ServiceAction::Restart));
        assert!("Reload".parse::<ServiceAction>().is_err());
    }

    #[test]
    fn should_default_missing_message_to_empty() {
        let result: CommandResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(result.success);
        assert!(result.message.is_empty());
    }
}
