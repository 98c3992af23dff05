//! Controller-side pieces a rendering layer needs: outward change events,
//! the sharing contract between a control and its parent, and debounced
//! text input.

mod debounce;
mod handle;

use std::time::Instant;

use tracing::trace;

pub use debounce::Debouncer;
pub use handle::{ControllerHandle, SharedController};

use crate::form::{ChangeEvent, FieldController};

/// Text input that coalesces rapid edits before validating and emitting.
#[derive(Debug)]
pub struct DebouncedField {
    controller: ControllerHandle<FieldController>,
    debouncer: Debouncer,
}

impl DebouncedField {
    pub fn new(controller: FieldController) -> Self {
        let delay = controller.control().options().debounce;
        Self {
            controller: ControllerHandle::new(controller),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn controller(&self) -> &ControllerHandle<FieldController> {
        &self.controller
    }

    pub fn share(&self) -> SharedController<FieldController> {
        self.controller.share()
    }

    pub fn focus(&self) {
        self.controller.borrow_mut().touch();
    }

    pub fn blur(&self) {
        self.controller.borrow_mut().dirty();
    }

    /// Stores the edit right away; validation waits for the delay.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.controller.borrow_mut().set_value(value);
        self.debouncer.restart(now);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Validates and yields the change event once the delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<ChangeEvent<String>> {
        if !self.debouncer.fire_due(now) {
            return None;
        }
        let mut controller = self.controller.borrow_mut();
        controller.validate();
        trace!(id = ?controller.id(), "debounced input settled");
        Some(controller.change_event())
    }

    /// Cancels a pending edit so it is neither validated nor emitted.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::validate::ValidatorConfig;

    fn email_field() -> DebouncedField {
        let mut field = FieldController::new();
        field.set_id("email");
        field.set_email(ValidatorConfig::new(true));
        DebouncedField::new(field)
    }

    #[test]
    fn validates_only_after_quiet_period() {
        let start = Instant::now();
        let mut input = email_field();
        input.input("a@", start);
        assert!(input.tick(start + Duration::from_millis(200)).is_none());
        assert!(!input.controller().borrow().validity().is_known());
        input.input("a@b.com", start + Duration::from_millis(200));
        assert!(input.tick(start + Duration::from_millis(400)).is_none());
        let event = input
            .tick(start + Duration::from_millis(550))
            .expect("settled");
        assert_eq!(event.value, "a@b.com");
        assert!(input.controller().borrow().is_valid());
        assert!(!input.is_pending());
    }

    #[test]
    fn teardown_cancels_pending_input() {
        let start = Instant::now();
        let mut input = email_field();
        input.input("broken", start);
        input.teardown();
        assert!(!input.is_pending());
        assert!(input.tick(start + Duration::from_secs(5)).is_none());
        assert!(!input.controller().borrow().validity().is_known());
    }

    #[test]
    fn shared_access_ends_when_field_drops() {
        let input = email_field();
        let shared = input.share();
        drop(input);
        assert!(shared.with(|field| field.is_valid()).is_none());
    }

    #[test]
    fn focus_and_blur_track_interaction() {
        let input = email_field();
        input.focus();
        input.blur();
        let flags = input.controller().borrow().interaction();
        assert!(flags.touched && flags.dirty && !flags.focused);
    }
}
