use serde::Serialize;

use crate::control::ControlId;

/// Outward "value changed" notification a shell forwards to its consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEvent<V> {
    pub id: Option<ControlId>,
    pub value: V,
}

impl<V> ChangeEvent<V> {
    pub fn new(id: Option<&ControlId>, value: V) -> Self {
        Self {
            id: id.cloned(),
            value,
        }
    }
}
