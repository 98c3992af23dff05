use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

/// Read-only view of a control value as the rules see it.
pub trait Validatable {
    /// Empty string, unchecked box, no selection.
    fn is_blank(&self) -> bool;

    /// Textual form of the value, if it has one.
    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl Validatable for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Validatable for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Validatable for Option<String> {
    fn is_blank(&self) -> bool {
        self.as_deref().is_none_or(str::is_empty)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// A compiled validator; `Disabled` always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Disabled,
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
}

impl Rule {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Rule::Disabled)
    }

    pub fn passes<V: Validatable + ?Sized>(&self, value: &V) -> bool {
        match self {
            Rule::Disabled => true,
            Rule::Required => !value.is_blank(),
            Rule::MinLength(bound) => {
                non_empty_text(value).is_none_or(|text| length(text) >= *bound)
            }
            Rule::MaxLength(bound) => {
                non_empty_text(value).is_none_or(|text| length(text) <= *bound)
            }
            Rule::Email => non_empty_text(value).is_none_or(is_email),
        }
    }
}

pub fn is_email(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text)
}

fn non_empty_text<V: Validatable + ?Sized>(value: &V) -> Option<&str> {
    value.as_text().filter(|text| !text.is_empty())
}

fn length(text: &str) -> usize {
    text.chars().count()
}
