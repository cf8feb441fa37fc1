use async_trait::async_trait;

use crate::{
    types::{GhIssue, GhLabel, GhRepository},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait(?Send)]
pub trait ApiService: Send + Sync {
    /// Get a repository from its owner and name.
    async fn repositories_get(&self, owner: &str, name: &str) -> Result<GhRepository>;
    /// List all labels defined on a repository.
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>>;
    /// Create a label on a repository.
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()>;
    /// Update an existing label, matched by its current name.
    async fn labels_update(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()>;
    /// Create an issue on a repository, attaching the given label names.
    async fn issues_create(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue>;
}
