use std::sync::Arc;

use formkit::io::reports_document;
use formkit::{ControlOptions, Controller, DocumentFormat, build_controllers, load_descriptors};
use serde_json::json;

const SIGNUP: &str = r#"
{
  "controls": [
    { "kind": "field", "id": "email", "value": "", "required": true, "email": "true" },
    { "kind": "field", "id": "nick", "value": "bob", "min": 2, "max": "8" },
    { "kind": "checkbox", "id": "terms", "required": "true", "requiredError": "Please accept" },
    { "kind": "select", "id": "plan", "options": ["free", "pro"], "value": "pro", "required": true }
  ]
}
"#;

#[test]
fn signup_form_reports_each_control() {
    let descriptors = load_descriptors(SIGNUP, DocumentFormat::Json).expect("descriptors");
    let controllers = build_controllers(&descriptors, Arc::new(ControlOptions::default()));
    let reports: Vec<_> = controllers.iter().map(Controller::report).collect();
    let document = reports_document(&reports).expect("document");
    assert_eq!(
        document["controls"][0]["errorMessage"],
        json!("This field is required.")
    );
    assert_eq!(document["controls"][1]["isValid"], json!(true));
    assert_eq!(document["controls"][2]["errorMessage"], json!("Please accept"));
    assert_eq!(document["controls"][3]["value"], json!("pro"));
    assert_eq!(document["controls"][3]["isValid"], json!(true));
}

#[test]
fn overrides_require_explicit_revalidation() {
    let descriptors = load_descriptors(SIGNUP, DocumentFormat::Json).expect("descriptors");
    let mut controllers = build_controllers(&descriptors, Arc::new(ControlOptions::default()));
    let terms = controllers
        .iter_mut()
        .find(|controller| controller.id().is_some_and(|id| id.matches("terms")))
        .expect("terms control");
    terms.apply_override("true").expect("boolean override");
    assert!(!terms.is_valid());
    assert!(terms.validate().is_valid());
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_descriptors_load() {
    let raw = "- kind: field\n  id: 3\n  value: hi\n  min: 5\n";
    let descriptors = load_descriptors(raw, DocumentFormat::Yaml).expect("yaml");
    let controllers = build_controllers(&descriptors, Arc::new(ControlOptions::default()));
    assert!(!controllers[0].is_valid());
}

#[cfg(feature = "toml")]
#[test]
fn toml_descriptors_load() {
    let raw = "[[controls]]\nkind = \"checkbox\"\nchecked = true\nrequired = true\n";
    let descriptors = load_descriptors(raw, DocumentFormat::Toml).expect("toml");
    let controllers = build_controllers(&descriptors, Arc::new(ControlOptions::default()));
    assert!(controllers[0].is_valid());
}
