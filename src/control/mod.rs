mod id;
mod state;

pub use id::ControlId;
pub use state::Control;
