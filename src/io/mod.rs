mod descriptor;
mod format;
mod input;
mod output;

pub use descriptor::{
    CheckboxDescriptor, ControlDescriptor, FieldDescriptor, SelectDescriptor, build_controllers,
    descriptors_from_value, load_descriptors,
};
pub use format::DocumentFormat;
pub use input::parse_document_str;
pub use output::{OutputOptions, emit_reports, render_reports, reports_document};
