//! Response entry: the uniform, intent-agnostic output unit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A primitive or string-list value in a [`ResponseEntry`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl ResponseValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ResponseValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ResponseValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Text(s.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::Text(s)
    }
}

impl From<i64> for ResponseValue {
    fn from(n: i64) -> Self {
        ResponseValue::Integer(n)
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(items: Vec<String>) -> Self {
        ResponseValue::List(items)
    }
}

/// Mapping of string keys to [`ResponseValue`]s; serializes as a flat JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseEntry {
    fields: BTreeMap<String, ResponseValue>,
}

impl ResponseEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<ResponseValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ResponseValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ResponseValue::as_text)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ResponseValue::as_integer)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ResponseValue::as_list)
    }

    /// Append `item` to the list under `key` unless already present.
    ///
    /// Starts a new list if the key is missing; a non-list value is replaced.
    pub fn push_unique(&mut self, key: &str, item: &str) {
        match self.fields.get_mut(key) {
            Some(ResponseValue::List(items)) => {
                if !items.iter().any(|existing| existing == item) {
                    items.push(item.to_string());
                }
            }
            _ => self.insert(key, vec![item.to_string()]),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_object() {
        let entry = ResponseEntry::new()
            .with("name", "Quiz 1")
            .with("due_date", 1_760_000_000_i64)
            .with("courses", vec!["Algorithms".to_string()]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Quiz 1",
                "due_date": 1_760_000_000_i64,
                "courses": ["Algorithms"],
            })
        );
    }

    #[test]
    fn test_push_unique() {
        let mut entry = ResponseEntry::new();
        entry.push_unique("courses", "Algorithms");
        entry.push_unique("courses", "Databases");
        entry.push_unique("courses", "Algorithms");
        assert_eq!(
            entry.list("courses").unwrap(),
            &["Algorithms".to_string(), "Databases".to_string()]
        );
    }

    #[test]
    fn test_typed_getters() {
        let entry = ResponseEntry::new().with("name", "A").with("n", 3_i64);
        assert_eq!(entry.text("name"), Some("A"));
        assert_eq!(entry.integer("n"), Some(3));
        assert_eq!(entry.text("n"), None);
        assert!(entry.list("name").is_none());
    }
}
