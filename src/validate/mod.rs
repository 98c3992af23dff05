mod param;
mod rules;
mod set;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use param::Param;
pub use rules::{Rule, Validatable, is_email};
pub use set::{Registration, ValidatorSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    Required,
    Min,
    Max,
    Email,
}

impl ValidatorKind {
    /// Evaluation order of the pipeline.
    pub const PIPELINE: [ValidatorKind; 4] = [
        ValidatorKind::Required,
        ValidatorKind::Min,
        ValidatorKind::Max,
        ValidatorKind::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Required => "required",
            ValidatorKind::Min => "min",
            ValidatorKind::Max => "max",
            ValidatorKind::Email => "email",
        }
    }

    pub(crate) fn compile(&self, param: &Param) -> Rule {
        match self {
            ValidatorKind::Required if param.is_truthy() => Rule::Required,
            ValidatorKind::Email if param.is_truthy() => Rule::Email,
            ValidatorKind::Min => param.as_bound().map_or(Rule::Disabled, Rule::MinLength),
            ValidatorKind::Max => param.as_bound().map_or(Rule::Disabled, Rule::MaxLength),
            _ => Rule::Disabled,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a shell passes when registering one validator kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorConfig {
    pub param: Param,
    pub message: Option<String>,
}

impl ValidatorConfig {
    pub fn new(param: impl Into<Param>) -> Self {
        Self {
            param: param.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a message only when one was supplied.
    pub fn with_optional_message(mut self, message: Option<impl Into<String>>) -> Self {
        self.message = message.map(Into::into);
        self
    }
}

/// Outcome of the last `validate()` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid(String),
}

impl Validity {
    /// Unknown counts as valid until someone asks.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Validity::Invalid(_))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Validity::Unknown)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Validity::Invalid(message) => Some(message),
            Validity::Unknown | Validity::Valid => None,
        }
    }
}
