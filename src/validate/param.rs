use serde::{Deserialize, Serialize};

/// Raw enabling parameter handed over by a shell, as loosely typed as the
/// attribute it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    #[default]
    Unset,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Param {
    /// `true` or the string `"true"`; everything else disables.
    pub fn is_truthy(&self) -> bool {
        match self {
            Param::Bool(flag) => *flag,
            Param::Text(text) => text.trim().eq_ignore_ascii_case("true"),
            Param::Unset | Param::Number(_) => false,
        }
    }

    /// Non-negative numeric bound, truncated to an integer.
    pub fn as_bound(&self) -> Option<usize> {
        let raw = match self {
            Param::Number(num) => *num,
            Param::Text(text) => text.trim().parse::<f64>().ok()?,
            Param::Unset | Param::Bool(_) => return None,
        };
        if raw.is_finite() && raw >= 0.0 {
            Some(raw.trunc() as usize)
        } else {
            None
        }
    }

    /// Attribute-presence reading used for initial checked state: only
    /// absence, `false` and `"false"` count as off.
    pub fn is_present(&self) -> bool {
        match self {
            Param::Unset | Param::Bool(false) => false,
            Param::Text(text) => text != "false",
            Param::Bool(true) | Param::Number(_) => true,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Param::Unset)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Number(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Number(value as f64)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Number(f64::from(value))
    }
}

impl From<usize> for Param {
    fn from(value: usize) -> Self {
        Param::Number(value as f64)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
