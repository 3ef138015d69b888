/*
[INPUT]:  JSON bodies returned by the Payeer API
[OUTPUT]: Envelope type with error detection and result-key projection
[POS]:    Data layer - response-side types
[UPDATE]: When envelope handling or result projections change
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::{PayeerError, Result};

/// The JSON object returned by every API call.
///
/// Carries either a truthy `errors` field or one or more result keys
/// (`balance`, `rate`, `list`, `info`, `history`, ...). Payeer leaves the
/// result shapes undocumented, so projections stay [`serde_json::Value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Extract a result key, consuming the envelope
    pub fn take(mut self, key: &str) -> Result<Value> {
        self.0.remove(key).ok_or_else(|| {
            PayeerError::InvalidResponse(format!("envelope is missing the `{key}` field"))
        })
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// The `errors` field when it actually signals an error.
    ///
    /// Payeer sends `"errors": []` (or `{}`, `""`, `0`, `null`) on success,
    /// so only a non-empty value counts.
    pub(crate) fn reported_errors(&self) -> Option<&Value> {
        self.0.get("errors").filter(|value| is_truthy(value))
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
