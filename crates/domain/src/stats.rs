//! System statistics snapshot returned by `GET /api/system/stats`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping from stat key (e.g. `cpu_usage`) to its display value.
///
/// Values are kept as raw JSON so that strings, numbers and booleans all
/// survive decoding; [`display_value`] turns them into element text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemStatSnapshot(BTreeMap<String, Value>);

impl SystemStatSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a stat.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(key, display text)` pairs in key order.
    pub fn display_entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), display_value(value)))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SystemStatSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Text an element shows for a stat value.
///
/// Strings are shown verbatim (no quotes), `null` as empty text, and
/// everything else as its JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_display_strings_without_quotes() {
        assert_eq!(display_value(&json!("45%")), "45%");
    }

    #[test]
    fn should_display_numbers_and_booleans_as_json() {
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(0.5)), "0.5");
        assert_eq!(display_value(&json!(true)), "true");
    }

    #[test]
    fn should_display_null_as_empty() {
        assert_eq!(display_value(&Value::Null), "");
    }

    #[test]
    fn should_deserialize_from_json_object() {
        let snapshot: SystemStatSnapshot = serde_json::from_str(
            r#"{"cpu_usage":"45%","memory_usage":"2.4 GB","load":1.5}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 3);
        let entries: Vec<_> = snapshot.display_entries().collect();
        assert_eq!(
            entries,
            vec![
                ("cpu_usage", "45%".to_string()),
                ("load", "1.5".to_string()),
                ("memory_usage", "2.4 GB".to_string()),
            ]
        );
    }

    #[test]
    fn should_collect_from_pairs() {
        let snapshot: SystemStatSnapshot = [("uptime", "5 days")].into_iter().collect();
        assert_eq!(snapshot.get("uptime"), Some(&json!("5 days")));
        assert!(!snapshot.is_empty());
    }
}
