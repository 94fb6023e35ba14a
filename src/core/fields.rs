//! Structured key-value fields attached to a logger
//!
//! `Fields` is an owned, ordered snapshot. Loggers never share a `Fields`
//! value; deriving a logger copies the parent's map and overlays the new
//! entries on the copy.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    entries: BTreeMap<String, Value>,
}

impl Fields {
    /// Create a new empty field set
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a JSON object such as `{"service":"api","shard":3}`
    ///
    /// Anything other than an object (including `null` and bare words) is an
    /// error carrying the underlying parse failure.
    pub fn from_json(payload: &str) -> Result<Self> {
        let entries: BTreeMap<String, Value> =
            serde_json::from_str(payload).map_err(LoggerError::InvalidFields)?;
        Ok(Self { entries })
    }

    /// Add a field, replacing any previous value under the same key
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add a field (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Return a new set holding `self` overlaid with `other`
    ///
    /// Keys present in both take the value from `other`. Neither input is
    /// modified.
    #[must_use]
    pub fn merged(&self, other: &Fields) -> Fields {
        let mut entries = self.entries.clone();
        for (key, value) in &other.entries {
            entries.insert(key.clone(), value.clone());
        }
        Fields { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Format fields as space separated key=value pairs
    ///
    /// String values are printed bare unless they contain a space, `"` or
    /// `=`, in which case they are quoted and escaped.
    pub fn format_fields(&self) -> String {
        let mut out = String::new();
        self.write_pairs(&mut out, str::to_string);
        out
    }

    /// Append the key=value pairs to `out`, rendering each key through
    /// `render_key`
    pub(crate) fn write_pairs<F>(&self, out: &mut String, render_key: F)
    where
        F: Fn(&str) -> String,
    {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&render_key(key));
            out.push('=');
            out.push_str(&format_value(value));
        }
    }
}

/// Render a single value for key=value output
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => escape_value(s),
        other => other.to_string(),
    }
}

fn escape_value(value: &str) -> String {
    if value.is_empty() || value.contains(' ') || value.contains('"') || value.contains('=') {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Fields {
    fn from(map: HashMap<String, Value>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Fields {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<serde_json::Map<String, Value>> for Fields {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
