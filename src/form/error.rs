/// A value override that a control could not take.
#[derive(Debug, Clone)]
pub struct OverrideError {
    pub id: String,
    pub message: String,
}

impl OverrideError {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for OverrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

impl std::error::Error for OverrideError {}
