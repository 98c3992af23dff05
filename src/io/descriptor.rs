use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{DocumentFormat, parse_document_str};
use crate::control::ControlId;
use crate::form::{CheckboxController, Controller, FieldController, SelectController};
use crate::options::ControlOptions;
use crate::validate::{Param, ValidatorConfig};

/// Declarative description of one control, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControlDescriptor {
    Checkbox(CheckboxDescriptor),
    Field(FieldDescriptor),
    Select(SelectDescriptor),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxDescriptor {
    pub id: Option<ControlId>,
    pub checked: Param,
    pub required: Param,
    pub required_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: Option<ControlId>,
    pub value: String,
    pub required: Param,
    pub min: Param,
    pub max: Param,
    pub email: Param,
    pub required_error: Option<String>,
    pub min_error: Option<String>,
    pub max_error: Option<String>,
    pub email_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectDescriptor {
    pub id: Option<ControlId>,
    pub options: Vec<String>,
    pub value: Option<String>,
    pub required: Param,
    pub required_error: Option<String>,
}

impl CheckboxDescriptor {
    /// Initializes the controller: identity, silent initial value,
    /// validators, then one validation pass.
    pub fn build(&self, options: Arc<ControlOptions>) -> CheckboxController {
        let mut checkbox = CheckboxController::with_options(options);
        if let Some(id) = &self.id {
            checkbox.set_id(id.clone());
        }
        checkbox.set_checked(self.checked.is_present(), false);
        checkbox.set_required(
            ValidatorConfig::new(self.required.clone())
                .with_optional_message(self.required_error.clone()),
        );
        checkbox.validate();
        checkbox
    }
}

impl FieldDescriptor {
    pub fn build(&self, options: Arc<ControlOptions>) -> FieldController {
        let mut field = FieldController::with_options(options);
        if let Some(id) = &self.id {
            field.set_id(id.clone());
        }
        field.set_value(self.value.clone());
        field.set_required(
            ValidatorConfig::new(self.required.clone())
                .with_optional_message(self.required_error.clone()),
        );
        field.set_min(
            ValidatorConfig::new(self.min.clone()).with_optional_message(self.min_error.clone()),
        );
        field.set_max(
            ValidatorConfig::new(self.max.clone()).with_optional_message(self.max_error.clone()),
        );
        field.set_email(
            ValidatorConfig::new(self.email.clone())
                .with_optional_message(self.email_error.clone()),
        );
        field.validate();
        field
    }
}

impl SelectDescriptor {
    pub fn build(&self, options: Arc<ControlOptions>) -> SelectController {
        let mut select = SelectController::with_options(self.options.clone(), options);
        if let Some(id) = &self.id {
            select.set_id(id.clone());
        }
        if let Some(value) = &self.value {
            select.select_value(value, false);
            if select.value() != Some(value.as_str()) {
                warn!(id = ?self.id, %value, "initial value is not one of the select options");
            }
        }
        select.set_required(
            ValidatorConfig::new(self.required.clone())
                .with_optional_message(self.required_error.clone()),
        );
        select.validate();
        select
    }
}

impl ControlDescriptor {
    pub fn build(&self, options: Arc<ControlOptions>) -> Controller {
        match self {
            ControlDescriptor::Checkbox(desc) => desc.build(options).into(),
            ControlDescriptor::Field(desc) => desc.build(options).into(),
            ControlDescriptor::Select(desc) => desc.build(options).into(),
        }
    }
}

impl Controller {
    pub fn from_descriptor(descriptor: &ControlDescriptor, options: Arc<ControlOptions>) -> Self {
        descriptor.build(options)
    }
}

/// Accepts a single descriptor, an array of them, or `{ "controls": [...] }`.
pub fn descriptors_from_value(value: Value) -> Result<Vec<ControlDescriptor>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) if !map.contains_key("kind") && map.contains_key("controls") => {
            match map.remove("controls") {
                Some(Value::Array(items)) => items,
                Some(other) => vec![other],
                None => Vec::new(),
            }
        }
        other => vec![other],
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<ControlDescriptor>(item)
                .with_context(|| format!("invalid control descriptor at index {index}"))
        })
        .collect()
}

pub fn load_descriptors(contents: &str, format: DocumentFormat) -> Result<Vec<ControlDescriptor>> {
    let value = parse_document_str(contents, format)?;
    descriptors_from_value(value)
}

pub fn build_controllers(
    descriptors: &[ControlDescriptor],
    options: Arc<ControlOptions>,
) -> Vec<Controller> {
    descriptors
        .iter()
        .map(|descriptor| descriptor.build(Arc::clone(&options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn defaults() -> Arc<ControlOptions> {
        Arc::new(ControlOptions::default())
    }

    #[test]
    fn loads_single_array_and_wrapped_documents() {
        let single = load_descriptors(r#"{"kind":"checkbox"}"#, DocumentFormat::Json).unwrap();
        assert_eq!(single.len(), 1);
        let array =
            load_descriptors(r#"[{"kind":"field"},{"kind":"select"}]"#, DocumentFormat::Json)
                .unwrap();
        assert_eq!(array.len(), 2);
        let wrapped =
            load_descriptors(r#"{"controls":[{"kind":"field"}]}"#, DocumentFormat::Json).unwrap();
        assert!(matches!(wrapped[0], ControlDescriptor::Field(_)));
    }

    #[test]
    fn unknown_kind_reports_index() {
        let err = descriptors_from_value(json!([{"kind": "field"}, {"kind": "slider"}]))
            .unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn non_integer_ids_still_load() {
        let descriptors = load_descriptors(
            r#"[{"kind":"field","id":1.5},{"kind":"checkbox","id":18446744073709551615}]"#,
            DocumentFormat::Json,
        )
        .expect("fractional and large ids");
        let controllers = build_controllers(&descriptors, defaults());
        assert_eq!(
            controllers[0].id().map(ToString::to_string).as_deref(),
            Some("1.5")
        );
        assert!(controllers[1].id().is_some_and(|id| id.matches("18446744073709551615")));
    }

    #[test]
    fn field_descriptor_initializes_and_validates() {
        let descriptors = descriptors_from_value(json!({
            "kind": "field",
            "id": "name",
            "value": "ab",
            "required": "true",
            "min": "5",
            "minError": "Too short"
        }))
        .unwrap();
        let controller = descriptors[0].build(defaults());
        let Controller::Field(field) = &controller else {
            panic!("expected field");
        };
        assert_eq!(field.error_message(), Some("Too short"));
        assert!(!field.is_touched());
    }

    #[test]
    fn email_descriptor_uses_email_message() {
        let desc = FieldDescriptor {
            value: "nope".into(),
            email: Param::from(true),
            required_error: Some("Needed".into()),
            ..FieldDescriptor::default()
        };
        let field = desc.build(defaults());
        assert_eq!(
            field.error_message(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn checkbox_checked_attribute_presence() {
        let desc: ControlDescriptor =
            serde_json::from_value(json!({"kind": "checkbox", "checked": "", "id": 4})).unwrap();
        let Controller::Checkbox(checkbox) = desc.build(defaults()) else {
            panic!("expected checkbox");
        };
        assert!(checkbox.is_checked());
        assert_eq!(checkbox.id(), Some(&ControlId::from(4)));
    }

    #[test]
    fn select_descriptor_ignores_unknown_initial_value() {
        let desc = SelectDescriptor {
            options: vec!["a".into(), "b".into()],
            value: Some("c".into()),
            required: Param::from(true),
            ..SelectDescriptor::default()
        };
        let select = desc.build(defaults());
        assert_eq!(select.value(), None);
        assert!(!select.is_valid());
    }
}
