//! Context flattening
//!
//! Evaluation never walks the caller's nested context. It is flattened
//! once into an ordered `path -> scalar` map and every reference lookup is
//! a single map access.

use crate::Value;
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

/// Nesting level below which context values are not flattened
pub const MAX_FLATTEN_DEPTH: usize = 128;

/// Key (and value) marking a JSON object as an already flattened context
pub const FLATTEN_MARKER_KEY: &str = "_flattenContext";

/// Ordered mapping from a flattened path to a scalar value.
///
/// Paths join map keys with `.` and list indices with `[i]`, e.g.
/// `user.roles[0]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedContext {
    entries: IndexMap<String, Value>,
}

impl FlattenedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a caller context. A JSON `null` context yields `None`.
    pub fn from_json(context: &JsonValue) -> Option<Self> {
        match context {
            JsonValue::Null => None,
            JsonValue::Object(map) if is_marked(map) => Some(Self::from_marked(map)),
            other => {
                let mut flattened = Self::new();
                flattened.flatten_into("", other, 0);
                Some(flattened)
            }
        }
    }

    /// Look up a path
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Insert a path directly
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(path.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Export as a marked JSON object. Passing it back to
    /// [`FlattenedContext::from_json`] rebuilds the same mapping.
    pub fn to_json(&self) -> JsonValue {
        let mut map: Map<String, JsonValue> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        map.insert(
            FLATTEN_MARKER_KEY.to_string(),
            JsonValue::String(FLATTEN_MARKER_KEY.to_string()),
        );
        JsonValue::Object(map)
    }

    fn flatten_into(&mut self, path: &str, value: &JsonValue, depth: usize) {
        if depth > MAX_FLATTEN_DEPTH {
            log::trace!("\"{}\" is nested too deep, skipped", path);
            return;
        }
        match value {
            JsonValue::Object(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    self.flatten_into(&child_path, child, depth + 1);
                }
            }
            JsonValue::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    self.flatten_into(&format!("{path}[{i}]"), child, depth + 1);
                }
            }
            scalar => {
                if let Some(value) = Value::from_json_scalar(scalar) {
                    self.entries.insert(path.to_string(), value);
                }
            }
        }
    }

    fn from_marked(map: &Map<String, JsonValue>) -> Self {
        let entries = map
            .iter()
            .filter(|(key, _)| key.as_str() != FLATTEN_MARKER_KEY)
            .filter_map(|(key, value)| Value::from_json_scalar(value).map(|v| (key.clone(), v)))
            .collect();
        Self { entries }
    }
}

fn is_marked(map: &Map<String, JsonValue>) -> bool {
    map.get(FLATTEN_MARKER_KEY)
        .and_then(JsonValue::as_str)
        .is_some_and(|marker| marker == FLATTEN_MARKER_KEY)
}

impl FromIterator<(String, Value)> for FlattenedContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Flatten a caller context
pub fn flatten_context(context: &JsonValue) -> Option<FlattenedContext> {
    FlattenedContext::from_json(context)
}
