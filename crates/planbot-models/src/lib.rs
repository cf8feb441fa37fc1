mod issue_spec;
mod label_spec;
mod project_plan;
mod repository_path;

pub use issue_spec::IssueSpec;
pub use label_spec::LabelSpec;
pub use project_plan::ProjectPlan;
pub use repository_path::{RepositoryPath, RepositoryPathError};
