//! API implementation errors.

use planbot_ghapi_interface::ApiError;
use thiserror::Error;

/// GitHub error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    /// Unknown or inaccessible repository.
    #[error("Repository not found: {}", repository_path)]
    RepositoryNotFound { repository_path: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::RepositoryNotFound { repository_path } => {
                ApiError::RepositoryNotFound { repository_path }
            }
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
