use std::sync::Arc;

use tracing::trace;

use super::ChangeEvent;
use crate::control::{Control, ControlId};
use crate::options::ControlOptions;
use crate::validate::{ValidatorConfig, ValidatorKind, Validity};

const CHECKBOX_KINDS: &[ValidatorKind] = &[ValidatorKind::Required];

/// Boolean control. Carries no touched/dirty tracking.
#[derive(Debug, Clone)]
pub struct CheckboxController {
    control: Control<bool>,
}

impl Default for CheckboxController {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckboxController {
    pub fn new() -> Self {
        Self::with_options(Arc::new(ControlOptions::default()))
    }

    pub fn with_options(options: Arc<ControlOptions>) -> Self {
        Self {
            control: Control::new(false, CHECKBOX_KINDS, options),
        }
    }

    /// Checks the box. The event is only produced when `should_emit` is set;
    /// initialization passes `false`.
    pub fn check(&mut self, should_emit: bool) -> Option<ChangeEvent<bool>> {
        self.set_checked(true, should_emit)
    }

    pub fn uncheck(&mut self, should_emit: bool) -> Option<ChangeEvent<bool>> {
        self.set_checked(false, should_emit)
    }

    pub fn set_checked(&mut self, checked: bool, should_emit: bool) -> Option<ChangeEvent<bool>> {
        self.control.set_value(checked);
        should_emit.then(|| self.change_event())
    }

    /// Click handling: flip and report the new value.
    pub fn toggle(&mut self) -> ChangeEvent<bool> {
        let next = !*self.control.value();
        trace!(id = ?self.control.id(), checked = next, "checkbox toggled");
        self.control.set_value(next);
        self.change_event()
    }

    pub fn set_required(&mut self, config: ValidatorConfig) {
        self.control.register_validator(ValidatorKind::Required, config);
    }

    /// Only `required` applies; other kinds are ignored.
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

    pub fn change_event(&self) -> ChangeEvent<bool> {
        ChangeEvent::new(self.control.id(), *self.control.value())
    }

    pub fn id(&self) -> Option<&ControlId> {
        self.control.id()
    }

    pub fn value(&self) -> bool {
        *self.control.value()
    }

    pub fn is_checked(&self) -> bool {
        self.value()
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

    pub fn control(&self) -> &Control<bool> {
        &self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fails_while_unchecked() {
        let mut checkbox = CheckboxController::new();
        checkbox.set_required(ValidatorConfig::new(true).with_message("Please agree"));
        assert_eq!(checkbox.validate().error_message(), Some("Please agree"));
        checkbox.check(false);
        assert!(checkbox.validate().is_valid());
    }

    #[test]
    fn falsy_string_disables_required() {
        let mut checkbox = CheckboxController::new();
        checkbox.set_required(ValidatorConfig::new("false"));
        checkbox.uncheck(false);
        assert!(checkbox.validate().is_valid());
        assert!(!checkbox.is_validation_on());
    }

    #[test]
    fn emission_follows_flag() {
        let mut checkbox = CheckboxController::new();
        checkbox.set_id("terms");
        assert!(checkbox.check(false).is_none());
        let event = checkbox.uncheck(true).expect("event requested");
        assert_eq!(event.id, Some(ControlId::from("terms")));
        assert!(!event.value);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut checkbox = CheckboxController::new();
        assert!(checkbox.toggle().value);
        assert!(!checkbox.toggle().value);
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn ignores_field_only_validators() {
        let mut checkbox = CheckboxController::new();
        assert!(!checkbox.register_validator(ValidatorKind::Min, ValidatorConfig::new(3)));
        assert!(!checkbox.is_validation_on());
    }
}
