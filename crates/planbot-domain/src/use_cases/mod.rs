//! Use cases.

mod create_issues;
mod sync_labels;

pub use create_issues::{CreateIssuesUseCase, IssueCreationOutcome, IssueCreationReport};
pub use sync_labels::{LabelSyncAction, LabelSyncOutcome, LabelSyncReport, SyncLabelsUseCase};
