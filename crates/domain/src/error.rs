//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PanelError`]
//! via `From` when crossing a port boundary.

/// Top-level error carried across port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Input rejected before any IO happened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never completed (network failure, non-2xx status, …).
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The response arrived but its body could not be decoded.
    #[error(transparent)]
    Decode(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid service name: name is empty")]
    EmptyServiceName,

    #[error("Invalid service name: {name:?}")]
    InvalidServiceName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error_verbatim() {
        let err: PanelError = ValidationError::EmptyServiceName.into();
        assert_eq!(err.to_string(), "Invalid service name: name is empty");
    }

    #[test]
    fn should_forward_transport_source_text() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = PanelError::Transport(Box::new(io));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn should_quote_rejected_service_name() {
        let err = ValidationError::InvalidServiceName {
            name: "a/b".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid service name: \"a/b\"");
    }
}
