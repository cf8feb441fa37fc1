use serde::{Deserialize, Serialize};

use super::GhIssueState;
use crate::types::common::GhLabel;

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Labels.
    pub labels: Vec<GhLabel>,
    /// State.
    pub state: GhIssueState,
    /// Body.
    pub body: Option<String>,
}
