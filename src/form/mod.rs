mod checkbox;
mod error;
mod event;
mod field;
mod report;
mod select;

use serde::{Deserialize, Serialize};

pub use checkbox::CheckboxController;
pub use error::OverrideError;
pub use event::ChangeEvent;
pub use field::{FieldController, Interaction};
pub use report::ControlReport;
pub use select::SelectController;

use crate::control::ControlId;
use crate::validate::Validity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Checkbox,
    Field,
    Select,
}

/// Any of the concrete controllers, for callers that hold a mixed list.
#[derive(Debug, Clone)]
pub enum Controller {
    Checkbox(CheckboxController),
    Field(FieldController),
    Select(SelectController),
}

impl Controller {
    pub fn kind(&self) -> ControlKind {
        match self {
            Controller::Checkbox(_) => ControlKind::Checkbox,
            Controller::Field(_) => ControlKind::Field,
            Controller::Select(_) => ControlKind::Select,
        }
    }

    pub fn id(&self) -> Option<&ControlId> {
        match self {
            Controller::Checkbox(checkbox) => checkbox.id(),
            Controller::Field(field) => field.id(),
            Controller::Select(select) => select.id(),
        }
    }

    pub fn validate(&mut self) -> &Validity {
        match self {
            Controller::Checkbox(checkbox) => checkbox.validate(),
            Controller::Field(field) => field.validate(),
            Controller::Select(select) => select.validate(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Controller::Checkbox(checkbox) => checkbox.is_valid(),
            Controller::Field(field) => field.is_valid(),
            Controller::Select(select) => select.is_valid(),
        }
    }

    /// Sets the value from its textual form the way a user edit would:
    /// no emission, no validation.
    pub fn apply_override(&mut self, raw: &str) -> Result<(), OverrideError> {
        let label = self.id().map(ToString::to_string).unwrap_or_default();
        match self {
            Controller::Field(field) => {
                field.set_value(raw);
                Ok(())
            }
            Controller::Checkbox(checkbox) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => {
                    checkbox.check(false);
                    Ok(())
                }
                "false" => {
                    checkbox.uncheck(false);
                    Ok(())
                }
                _ => Err(OverrideError::new(
                    label,
                    format!("'{raw}' is not a valid boolean"),
                )),
            },
            Controller::Select(select) => {
                if raw.is_empty() {
                    select.clear(false);
                    return Ok(());
                }
                if !select.options().iter().any(|option| option == raw) {
                    return Err(OverrideError::new(
                        label,
                        format!(
                            "value '{raw}' is not one of: {}",
                            select.options().join(", ")
                        ),
                    ));
                }
                select.select_value(raw, false);
                Ok(())
            }
        }
    }

    pub fn report(&self) -> ControlReport {
        ControlReport::from_controller(self)
    }
}

impl From<CheckboxController> for Controller {
    fn from(value: CheckboxController) -> Self {
        Controller::Checkbox(value)
    }
}

impl From<FieldController> for Controller {
    fn from(value: FieldController) -> Self {
        Controller::Field(value)
    }
}

impl From<SelectController> for Controller {
    fn from(value: SelectController) -> Self {
        Controller::Select(value)
    }
}
