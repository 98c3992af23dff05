use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Opaque identity used to correlate change events with a control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlId {
    Number(Number),
    Text(String),
}

impl ControlId {
    /// Matches an override key such as `email`, `7` or `1.5` against this id.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ControlId::Text(text) => text == raw,
            ControlId::Number(num) => raw.trim().parse::<Number>().is_ok_and(|parsed| {
                parsed == *num || (parsed.as_f64().is_some() && parsed.as_f64() == num.as_f64())
            }),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::Number(num) => write!(f, "{num}"),
            ControlId::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ControlId {
    fn from(value: &str) -> Self {
        ControlId::Text(value.to_string())
    }
}

impl From<String> for ControlId {
    fn from(value: String) -> Self {
        ControlId::Text(value)
    }
}

impl From<i64> for ControlId {
    fn from(value: i64) -> Self {
        ControlId::Number(Number::from(value))
    }
}

impl From<i32> for ControlId {
    fn from(value: i32) -> Self {
        ControlId::Number(Number::from(value))
    }
}

impl From<u64> for ControlId {
    fn from(value: u64) -> Self {
        ControlId::Number(Number::from(value))
    }
}

impl From<Number> for ControlId {
    fn from(value: Number) -> Self {
        ControlId::Number(value)
    }
}
