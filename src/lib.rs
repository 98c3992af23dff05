#![deny(rust_2018_idioms)]

pub mod control;
pub mod form;
pub mod io;
pub mod options;
pub mod shell;
pub mod validate;

pub use control::{Control, ControlId};
pub use form::{
    ChangeEvent, CheckboxController, ControlKind, ControlReport, Controller, FieldController,
    Interaction, OverrideError, SelectController,
};
pub use io::{
    ControlDescriptor, DocumentFormat, OutputOptions, build_controllers, emit_reports,
    load_descriptors, parse_document_str,
};
pub use options::{ControlOptions, Messages};
pub use shell::{ControllerHandle, DebouncedField, Debouncer, SharedController};
pub use validate::{Param, ValidatorConfig, ValidatorKind, Validity};

pub mod prelude {
    pub use super::{
        CheckboxController, ControlOptions, Controller, FieldController, SelectController,
        ValidatorConfig, ValidatorKind, Validity,
    };
}
