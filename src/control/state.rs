use std::{fmt, sync::Arc};

use tracing::{debug, trace};

use super::ControlId;
use crate::options::ControlOptions;
use crate::validate::{Validatable, ValidatorConfig, ValidatorKind, ValidatorSet, Validity};

/// Value, identity and validation status shared by every control.
///
/// Mutators never run the validators; the owner calls [`Control::validate`]
/// whenever displayed errors should follow the new state.
#[derive(Debug, Clone)]
pub struct Control<V> {
    id: Option<ControlId>,
    value: V,
    validators: ValidatorSet,
    validity: Validity,
    options: Arc<ControlOptions>,
}

impl<V> Control<V>
where
    V: Validatable + fmt::Debug,
{
    pub fn new(
        value: V,
        supported: &'static [ValidatorKind],
        options: Arc<ControlOptions>,
    ) -> Self {
        Self {
            id: None,
            value,
            validators: ValidatorSet::new(supported),
            validity: Validity::Unknown,
            options,
        }
    }

    pub fn set_id(&mut self, id: impl Into<ControlId>) {
        self.id = Some(id.into());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn set_value(&mut self, value: V) {
        trace!(id = ?self.id, ?value, "value replaced");
        self.value = value;
    }

    /// Returns `false` if the control does not accept `kind`.
    pub fn register_validator(&mut self, kind: ValidatorKind, config: ValidatorConfig) -> bool {
        self.validators.register(kind, config, &self.options.messages)
    }

    pub fn validate(&mut self) -> &Validity {
        self.validity = self.validators.evaluate(&self.value);
        debug!(id = ?self.id, validity = ?self.validity, "control validated");
        &self.validity
    }

    pub fn id(&self) -> Option<&ControlId> {
        self.id.as_ref()
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.validity.error_message()
    }

    pub fn is_validation_on(&self) -> bool {
        self.validators.any_enabled()
    }

    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    pub fn options(&self) -> &ControlOptions {
        &self.options
    }
}
