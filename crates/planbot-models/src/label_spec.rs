use serde::{Deserialize, Serialize};

/// A label to create or update on the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Name, unique within the repository (case-sensitive).
    pub name: String,
    /// Color, six hex digits without a leading '#'.
    pub color: String,
    /// Description.
    pub description: String,
}

impl LabelSpec {
    /// Creates a new label spec.
    pub fn new<T: Into<String>>(name: T, color: T, description: T) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}
