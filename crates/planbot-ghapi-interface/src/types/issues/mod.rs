mod issue;
mod issue_state;

pub use issue::GhIssue;
pub use issue_state::GhIssueState;
