//! HTTP adapter error types.

use easypanel_domain::error::PanelError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL is unusable.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// reqwest failed to build the client or to complete the request.
    #[error("{0}")]
    Client(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and no usable body.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<HttpError> for PanelError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Decode(_) => PanelError::Decode(Box::new(err)),
            other => PanelError::Transport(Box::new(other)),
        }
    }
}
