//! Binding: the declarative link between an on-screen element and the
//! snapshot key it displays.
//!
//! In the panel's HTML a binding is an attribute such as
//! `data-service-status="nginx"` or `data-stat="cpu_usage"`. Rendering only
//! ever changes the bound element's text and class, never the binding.

use std::fmt;

/// Which snapshot a binding reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindingKind {
    /// Bound to an entry of the service status snapshot.
    ServiceStatus,
    /// Bound to a key of the system stat snapshot.
    Stat,
}

impl BindingKind {
    /// HTML attribute carrying the key.
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::ServiceStatus => "data-service-status",
            Self::Stat => "data-stat",
        }
    }
}

/// A `(kind, key)` pair identifying one bound element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binding {
    pub kind: BindingKind,
    pub key: String,
}

impl Binding {
    /// Binding for a service status badge.
    pub fn service(name: impl Into<String>) -> Self {
        Self {
            kind: BindingKind::ServiceStatus,
            key: name.into(),
        }
    }

    /// Binding for a system stat value.
    pub fn stat(key: impl Into<String>) -> Self {
        Self {
            kind: BindingKind::Stat,
            key: key.into(),
        }
    }

    /// Attribute selector matching the bound element, e.g.
    /// `[data-service-status="nginx"]`.
    ///
    /// Quotes and backslashes in the key are escaped.
    #[must_use]
    pub fn selector(&self) -> String {
        let mut escaped = String::with_capacity(self.key.len());
        for c in self.key.chars() {
            if matches!(c, '"' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        format!("[{}=\"{escaped}\"]", self.kind.attribute())
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_service_status_selector() {
        assert_eq!(
            Binding::service("nginx").selector(),
            "[data-service-status=\"nginx\"]"
        );
    }

    #[test]
    fn should_render_stat_selector() {
        assert_eq!(Binding::stat("cpu_usage").to_string(), "[data-stat=\"cpu_usage\"]");
    }

    #[test]
    fn should_escape_quotes_in_selector() {
        assert_eq!(
            Binding::stat("a\"b").selector(),
            "[data-stat=\"a\\\"b\"]"
        );
    }

    #[test]
    fn should_distinguish_kinds_with_same_key() {
        assert_ne!(Binding::service("disk"), Binding::stat("disk"));
    }
}
