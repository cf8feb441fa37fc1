use serde::{Deserialize, Serialize};

use crate::{IssueSpec, LabelSpec};

/// A full seeding plan: labels to synchronize, then issues to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    /// Labels, in synchronization order.
    pub labels: Vec<LabelSpec>,
    /// Issues, in creation order.
    pub issues: Vec<IssueSpec>,
}
