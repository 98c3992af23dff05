use serde::Serialize;
use serde_json::Value;

use super::{ControlKind, Controller};
use crate::control::ControlId;

/// Serializable snapshot of a control's derived state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlReport {
    pub id: Option<ControlId>,
    pub kind: ControlKind,
    pub value: Value,
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub is_validation_on: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touched: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty: Option<bool>,
}

impl ControlReport {
    pub fn from_controller(controller: &Controller) -> Self {
        let (value, is_valid, error_message, is_validation_on) = match controller {
            Controller::Checkbox(checkbox) => (
                Value::Bool(checkbox.value()),
                checkbox.is_valid(),
                checkbox.error_message(),
                checkbox.is_validation_on(),
            ),
            Controller::Field(field) => (
                Value::String(field.value().to_string()),
                field.is_valid(),
                field.error_message(),
                field.is_validation_on(),
            ),
            Controller::Select(select) => (
                select
                    .value()
                    .map_or(Value::Null, |value| Value::String(value.to_string())),
                select.is_valid(),
                select.error_message(),
                select.is_validation_on(),
            ),
        };
        let interaction = match controller {
            Controller::Field(field) => Some(field.interaction()),
            _ => None,
        };
        ControlReport {
            id: controller.id().cloned(),
            kind: controller.kind(),
            value,
            is_valid,
            error_message: error_message.map(str::to_string),
            is_validation_on,
            touched: interaction.map(|flags| flags.touched),
            dirty: interaction.map(|flags| flags.dirty),
        }
    }
}
