use serde::{Deserialize, Serialize};

/// An issue to create on the target repository.
///
/// Label names are attached as-is; the remote end decides what to do with
/// names it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSpec {
    /// Title.
    pub title: String,
    /// Body, free-form markdown.
    pub body: String,
    /// Label names to attach.
    pub labels: Vec<String>,
}

impl IssueSpec {
    /// Creates a new issue spec.
    pub fn new<T: Into<String>>(title: T, body: T, labels: &[&str]) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}
