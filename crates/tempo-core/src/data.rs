//! Transition payload - key-value data handed from one game state to the next.
//!
//! Values are stored as `toml::Value` so payloads can hold any shape a state
//! needs and can be written to / read from TOML text for debugging or saves.
//! The engine hands a *clone* of the outgoing payload to the next state, so the
//! two states never share the same table.

use crate::Result;
use serde::{Deserialize, Serialize};

/// A string-keyed table of values carried across a state transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionData {
    data: toml::Table,
}

impl TransitionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value by key. Overwrites any existing value.
    pub fn set(&mut self, key: &str, value: impl Into<toml::Value>) {
        self.data.insert(key.to_string(), value.into());
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.data.get(key)
    }

    /// Get a mutable value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut toml::Value> {
        self.data.get_mut(key)
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(toml::Value::as_integer)
    }

    /// Float lookup; integers are widened so `score = 10` reads as `10.0`.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            toml::Value::Float(f) => Some(*f),
            toml::Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(toml::Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(toml::Value::as_bool)
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a key, returning the old value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        self.data.remove(key)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Return all keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serialize the payload as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.data)?)
    }

    /// Parse a payload from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data: toml::Table = toml::from_str(content)?;
        Ok(Self { data })
    }
}

impl From<toml::Table> for TransitionData {
    fn from(data: toml::Table) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut data = TransitionData::new();
        assert!(data.is_empty());

        data.set("score", 10);
        data.set("difficulty", "hard");
        data.set("ratio", 0.5);
        data.set("bonus", true);

        assert_eq!(data.len(), 4);
        assert_eq!(data.get_integer("score"), Some(10));
        assert_eq!(data.get_str("difficulty"), Some("hard"));
        assert_eq!(data.get_float("ratio"), Some(0.5));
        assert_eq!(data.get_bool("bonus"), Some(true));
        assert!(data.has("score"));

        assert_eq!(data.remove("score"), Some(toml::Value::Integer(10)));
        assert!(!data.has("score"));
        assert!(data.remove("score").is_none());
    }

    #[test]
    fn test_float_accepts_integers() {
        let data = TransitionData::new().with("score", 7);
        assert_eq!(data.get_float("score"), Some(7.0));
        assert_eq!(data.get_str("score"), None);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = TransitionData::new().with("score", 10);
        let mut copy = original.clone();
        copy.set("score", 99);
        assert_eq!(original.get_integer("score"), Some(10));
        assert_eq!(copy.get_integer("score"), Some(99));
    }

    #[test]
    fn test_nested_values_are_deep_copied() {
        let mut inventory = toml::Table::new();
        inventory.insert("potions".into(), toml::Value::Integer(3));
        let original = TransitionData::new().with("inventory", toml::Value::Table(inventory));

        let mut copy = original.clone();
        if let Some(toml::Value::Table(t)) = copy.get_mut("inventory") {
            t.insert("potions".into(), toml::Value::Integer(0));
        }

        let potions = original
            .get("inventory")
            .and_then(|v| v.get("potions"))
            .and_then(toml::Value::as_integer);
        assert_eq!(potions, Some(3));
    }

    #[test]
    fn test_toml_text() {
        let data = TransitionData::new().with("level", 2).with("name", "caves");
        let text = data.to_toml_string().unwrap();
        let parsed = TransitionData::from_toml_str(&text).unwrap();
        assert_eq!(parsed.keys(), vec!["level", "name"]);
        assert_eq!(parsed.get_str("name"), Some("caves"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TransitionData::from_toml_str("level = [").is_err());
    }
}
