//! Passthrough options for delegate chunkers

use super::ChunkerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Untyped key-value options forwarded to a delegate factory
///
/// Keys are kept sorted so two option sets with the same contents always
/// produce the same fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkerOptions(BTreeMap<String, Value>);

impl ChunkerOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw option value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the option set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Option keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a `KEY=VALUE` pair. The value is read as JSON when it parses,
    /// otherwise it is kept as a plain string.
    pub fn parse_pair(pair: &str) -> Option<(String, Value)> {
        let (key, raw) = pair.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let value = serde_json::from_str(raw.trim())
            .unwrap_or_else(|_| Value::String(raw.trim().to_string()));
        Some((key.to_string(), value))
    }

    /// Canonical textual form: sorted keys, compact JSON values
    pub fn canonical(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Fail on the first key not in `allowed`
    pub fn reject_unknown(&self, allowed: &[&str]) -> Result<(), ChunkerError> {
        match self.keys().find(|key| !allowed.contains(key)) {
            Some(key) => Err(ChunkerError::UnknownOption(key.to_string())),
            None => Ok(()),
        }
    }

    /// Positive integer option with a default
    pub fn positive_or(&self, key: &str, default: usize) -> Result<usize, ChunkerError> {
        let value = self.usize_or(key, default)?;
        if value == 0 {
            return Err(invalid(key, "a positive integer"));
        }
        Ok(value)
    }

    /// Non-negative integer option with a default
    pub fn usize_or(&self, key: &str, default: usize) -> Result<usize, ChunkerError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| invalid(key, "a non-negative integer")),
        }
    }

    /// String option with a default
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, ChunkerError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.as_str().ok_or_else(|| invalid(key, "a string")),
        }
    }

    /// List-of-strings option, `None` when absent
    pub fn strings(&self, key: &str) -> Result<Option<Vec<String>>, ChunkerError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| invalid(key, "a list of strings"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(key, "a list of strings"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn invalid(key: &str, expected: &'static str) -> ChunkerError {
    ChunkerError::InvalidOption {
        key: key.to_string(),
        expected,
    }
}

impl FromIterator<(String, Value)> for ChunkerOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
