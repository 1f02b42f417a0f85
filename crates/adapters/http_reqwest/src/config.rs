//! Panel connection configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::HttpError;
use crate::ReqwestPanelApi;

/// Where the panel lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL the `/api/...` paths are appended to. May carry a path prefix.
    pub base_url: String,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check that the base URL is an absolute `http`/`https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] otherwise.
    pub fn validate(&self) -> Result<(), HttpError> {
        let invalid = |reason: String| HttpError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = reqwest::Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        Ok(())
    }

    /// Validate the configuration and build the API client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] for a bad base URL, or
    /// [`HttpError::Client`] if reqwest cannot build its client.
    pub fn build(&self) -> Result<ReqwestPanelApi, HttpError> {
        self.validate()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(ReqwestPanelApi::new(builder.build()?, &self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            base_url = "https://panel.example.com/admin"
            timeout_secs = 15
        "#;
        let config: HttpConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://panel.example.com/admin");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: HttpConfig = toml::from_str("timeout_secs = 3").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn should_accept_http_and_https() {
        for base_url in ["http://localhost:8080", "https://panel.example.com/prefix/"] {
            let config = HttpConfig {
                base_url: base_url.to_string(),
                timeout_secs: None,
            };
            assert!(config.validate().is_ok(), "{base_url}");
        }
    }

    #[test]
    fn should_reject_unusable_base_urls() {
        for base_url in ["", "localhost:8080", "ftp://panel", "http://panel/?x=1"] {
            let config = HttpConfig {
                base_url: base_url.to_string(),
                timeout_secs: None,
            };
            assert!(
                matches!(config.validate(), Err(HttpError::InvalidBaseUrl { .. })),
                "{base_url:?}"
            );
        }
    }

    #[test]
    fn should_strip_trailing_slash_when_building() {
        let config = HttpConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: Some(5),
        };
        let api = config.build().unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080");
    }
}
