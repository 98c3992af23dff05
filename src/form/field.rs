use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use super::ChangeEvent;
use crate::control::{Control, ControlId};
use crate::options::ControlOptions;
use crate::validate::{ValidatorConfig, ValidatorKind, Validity};

const FIELD_KINDS: &[ValidatorKind] = &ValidatorKind::PIPELINE;

/// Focus history of a text field. `touched` and `dirty` only ever go from
/// `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub touched: bool,
    pub dirty: bool,
    pub focused: bool,
}

/// Text input control holding its raw string.
#[derive(Debug, Clone)]
pub struct FieldController {
    control: Control<String>,
    interaction: Interaction,
}

impl Default for FieldController {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldController {
    pub fn new() -> Self {
        Self::with_options(Arc::new(ControlOptions::default()))
    }

    pub fn with_options(options: Arc<ControlOptions>) -> Self {
        Self {
            control: Control::new(String::new(), FIELD_KINDS, options),
            interaction: Interaction::default(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.control.set_value(value.into());
    }

    /// Focus gained.
    pub fn touch(&mut self) {
        trace!(id = ?self.control.id(), "field touched");
        self.interaction.touched = true;
        self.interaction.focused = true;
    }

    /// Focus lost.
    pub fn dirty(&mut self) {
        trace!(id = ?self.control.id(), "field dirtied");
        self.interaction.dirty = true;
        self.interaction.focused = false;
    }

    pub fn set_required(&mut self, config: ValidatorConfig) {
        self.register_validator(ValidatorKind::Required, config);
    }

    pub fn set_min(&mut self, config: ValidatorConfig) {
        self.register_validator(ValidatorKind::Min, config);
    }

    pub fn set_max(&mut self, config: ValidatorConfig) {
        self.register_validator(ValidatorKind::Max, config);
    }

    pub fn set_email(&mut self, config: ValidatorConfig) {
        self.register_validator(ValidatorKind::Email, config);
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

    pub fn change_event(&self) -> ChangeEvent<String> {
        ChangeEvent::new(self.control.id(), self.control.value().clone())
    }

    pub fn id(&self) -> Option<&ControlId> {
        self.control.id()
    }

    pub fn value(&self) -> &str {
        self.control.value()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_touched(&self) -> bool {
        self.interaction.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.interaction.dirty
    }

    pub fn is_focused(&self) -> bool {
        self.interaction.focused
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

    pub fn control(&self) -> &Control<String> {
        &self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_is_one_way() {
        let mut field = FieldController::new();
        field.touch();
        assert!(field.is_focused());
        field.dirty();
        assert!(!field.is_focused());
        field.set_value("a");
        field.set_value("");
        field.validate();
        assert!(field.is_touched());
        assert!(field.is_dirty());
    }

    #[test]
    fn blur_without_focus_still_marks_dirty() {
        let mut field = FieldController::new();
        field.dirty();
        assert!(field.is_dirty());
        assert!(!field.is_touched());
    }

    #[test]
    fn max_rejects_long_values() {
        let mut field = FieldController::new();
        field.set_max(ValidatorConfig::new("3"));
        field.set_value("abcd");
        assert_eq!(
            field.validate().error_message(),
            Some("Please enter no more than 3 characters.")
        );
        field.set_value("abc");
        assert!(field.validate().is_valid());
    }

    #[test]
    fn non_numeric_bound_disables_min() {
        let mut field = FieldController::new();
        field.set_min(ValidatorConfig::new("five"));
        field.set_value("a");
        assert!(field.validate().is_valid());
        assert!(!field.is_validation_on());
    }

    #[test]
    fn change_event_carries_id_and_value() {
        let mut field = FieldController::new();
        field.set_id(7);
        field.set_value("hello");
        let event = field.change_event();
        assert_eq!(event.id, Some(ControlId::from(7)));
        assert_eq!(event.value, "hello");
    }
}
