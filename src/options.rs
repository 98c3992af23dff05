use std::{sync::Arc, time::Duration};

use crate::validate::ValidatorKind;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);

/// Built-in messages used when a registration carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: String,
    /// `{n}` is replaced by the bound.
    pub min: String,
    /// `{n}` is replaced by the bound.
    pub max: String,
    pub email: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required.".to_string(),
            min: "Please enter at least {n} characters.".to_string(),
            max: "Please enter no more than {n} characters.".to_string(),
            email: "Please enter a valid email address.".to_string(),
        }
    }
}

impl Messages {
    pub fn for_kind(&self, kind: ValidatorKind, bound: Option<usize>) -> String {
        let template = match kind {
            ValidatorKind::Required => &self.required,
            ValidatorKind::Min => &self.min,
            ValidatorKind::Max => &self.max,
            ValidatorKind::Email => &self.email,
        };
        match bound {
            Some(bound) => template.replace("{n}", &bound.to_string()),
            None => template.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlOptions {
    pub debounce: Duration,
    pub messages: Messages,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            messages: Messages::default(),
        }
    }
}

impl ControlOptions {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_required_message(self, message: impl Into<String>) -> Self {
        self.map_messages(|mut messages| {
            messages.required = message.into();
            messages
        })
    }

    pub fn with_min_message(self, template: impl Into<String>) -> Self {
        self.map_messages(|mut messages| {
            messages.min = template.into();
            messages
        })
    }

    pub fn with_max_message(self, template: impl Into<String>) -> Self {
        self.map_messages(|mut messages| {
            messages.max = template.into();
            messages
        })
    }

    pub fn with_email_message(self, message: impl Into<String>) -> Self {
        self.map_messages(|mut messages| {
            messages.email = message.into();
            messages
        })
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn map_messages<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Messages) -> Messages,
    {
        self.messages = f(self.messages);
        self
    }
}
