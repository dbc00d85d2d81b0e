//! Invocation parameters supplied by the caller at trigger time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field-name to value mapping passed into a trigger.
///
/// Owned by the caller and moved into the call; the orchestrator never
/// mutates the caller's copy. Values are ordinary JSON values; form inputs
/// often submit numbers as strings, so the numeric accessors accept both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Replaces any existing value for the field.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Whether no fields are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw value for a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String view of a field, if it holds a string.
    pub fn str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Numeric view of a field. Accepts JSON numbers and numeric strings.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.0.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Presence check: the field exists and holds a non-empty string.
    pub fn has_text(&self, field: &str) -> bool {
        self.str(field).is_some_and(|s| !s.trim().is_empty())
    }

    /// Presence check: the field parses as a number greater than zero.
    pub fn has_positive(&self, field: &str) -> bool {
        self.number(field).is_some_and(|n| n > 0.0)
    }

    /// Render as query-string pairs for GET-style calls.
    ///
    /// String values are used as-is; other values use their JSON rendering.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(field, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (field.clone(), rendered)
            })
            .collect()
    }

    /// Consume into a JSON object body.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
