use std::io::Write;

use anyhow::{Context, Result};
use serde_json::{Value, json};

use super::DocumentFormat;
use crate::form::ControlReport;

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Wraps reports as `{ "controls": [...] }`, the same shape descriptors load from.
pub fn reports_document(reports: &[ControlReport]) -> Result<Value> {
    let controls = serde_json::to_value(reports).context("failed to serialize control reports")?;
    Ok(json!({ "controls": controls }))
}

pub fn render_reports(reports: &[ControlReport], options: &OutputOptions) -> Result<String> {
    let document = reports_document(reports)?;
    match (options.format, options.pretty) {
        (DocumentFormat::Json, true) => {
            serde_json::to_string_pretty(&document).context("failed to render JSON report")
        }
        (DocumentFormat::Json, false) => {
            serde_json::to_string(&document).context("failed to render JSON report")
        }
        #[cfg(feature = "yaml")]
        (DocumentFormat::Yaml, _) => {
            serde_yaml::to_string(&document).context("failed to render YAML report")
        }
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, pretty) => {
            // TOML has no null.
            let document = strip_nulls(&document);
            let rendered = if pretty {
                toml::to_string_pretty(&document)
            } else {
                toml::to_string(&document)
            };
            rendered.context("failed to render TOML report")
        }
    }
}

/// Renders the reports and writes them, newline-terminated, to `out`.
pub fn emit_reports<W: Write>(
    reports: &[ControlReport],
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let rendered = render_reports(reports, options)?;
    writeln!(out, "{rendered}").context("failed to write control reports")?;
    out.flush().context("failed to flush control reports")
}

#[cfg(feature = "toml")]
fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, item)| !item.is_null())
                .map(|(key, item)| (key.clone(), strip_nulls(item)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other.clone(),
    }
}
