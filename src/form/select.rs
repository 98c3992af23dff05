use std::sync::Arc;

use super::ChangeEvent;
use crate::control::{Control, ControlId};
use crate::options::ControlOptions;
use crate::validate::{ValidatorConfig, ValidatorKind, Validity};

const SELECT_KINDS: &[ValidatorKind] = &[ValidatorKind::Required];

/// Single choice out of a fixed option list.
#[derive(Debug, Clone)]
pub struct SelectController {
    control: Control<Option<String>>,
    options: Vec<String>,
}

impl SelectController {
    pub fn new(options: Vec<String>) -> Self {
        Self::with_options(options, Arc::new(ControlOptions::default()))
    }

    pub fn with_options(options: Vec<String>, control_options: Arc<ControlOptions>) -> Self {
        Self {
            control: Control::new(None, SELECT_KINDS, control_options),
            options,
        }
    }

    /// Replaces the option list, dropping a selection that is no longer offered.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        let stale = self
            .control
            .value()
            .as_ref()
            .is_some_and(|current| !self.options.contains(current));
        if stale {
            self.control.set_value(None);
        }
    }

    /// Selects by position; out-of-range indices select the last option.
    pub fn select(
        &mut self,
        index: usize,
        should_emit: bool,
    ) -> Option<ChangeEvent<Option<String>>> {
        let last = self.options.len().checked_sub(1)?;
        let chosen = self.options[index.min(last)].clone();
        self.control.set_value(Some(chosen));
        should_emit.then(|| self.change_event())
    }

    /// Selects by value. Unknown values leave the selection unchanged.
    pub fn select_value(
        &mut self,
        value: &str,
        should_emit: bool,
    ) -> Option<ChangeEvent<Option<String>>> {
        let index = self.options.iter().position(|option| option == value)?;
        self.select(index, should_emit)
    }

    pub fn clear(&mut self, should_emit: bool) -> Option<ChangeEvent<Option<String>>> {
        self.control.set_value(None);
        should_emit.then(|| self.change_event())
    }

    pub fn set_required(&mut self, config: ValidatorConfig) {
        self.control.register_validator(ValidatorKind::Required, config);
    }

    pub fn register_validator(&mut self, kind: ValidatorKind, config: ValidatorConfig) -> bool {
        self.control.register_validator(kind, config)
    }

    pub fn set_id(&mut self, id: impl Into<ControlId>) {
        self.control.set_id(id);
    }

    pub fn clear_id(&mut self) {
        self.control.clear_id();
    }

    pub fn validate(&mut self) -> &Validity {
        self.control.validate()
    }

    pub fn change_event(&self) -> ChangeEvent<Option<String>> {
        ChangeEvent::new(self.control.id(), self.control.value().clone())
    }

    pub fn id(&self) -> Option<&ControlId> {
        self.control.id()
    }

    pub fn value(&self) -> Option<&str> {
        self.control.value().as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        let current = self.value()?;
        self.options.iter().position(|option| option == current)
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn validity(&self) -> &Validity {
        self.control.validity()
    }

    pub fn is_valid(&self) -> bool {
        self.control.is_valid()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.control.error_message()
    }

    pub fn is_validation_on(&self) -> bool {
        self.control.is_validation_on()
    }

    pub fn control(&self) -> &Control<Option<String>> {
        &self.control
    }
}
