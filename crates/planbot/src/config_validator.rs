//! Validation utilities.

use planbot_config::Config;
use planbot_models::{RepositoryPath, RepositoryPathError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "GitHub token not found: set the GH_TOKEN or GITHUB_TOKEN environment variable \
         (e.g. export GH_TOKEN=your_token_here)"
    )]
    MissingGithubToken,

    #[error("Invalid GITHUB_REPOSITORY value")]
    InvalidRepository { source: RepositoryPathError },
}

/// Check configuration before any service is built.
pub(crate) fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    if config.github_token.is_empty() {
        return Err(ValidationError::MissingGithubToken);
    }

    RepositoryPath::new(&config.repository)
        .map_err(|e| ValidationError::InvalidRepository { source: e })?;

    Ok(())
}
