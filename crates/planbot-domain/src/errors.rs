//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`planbot_ghapi_interface::ApiError`].
    #[error("API error")]
    ApiError {
        source: planbot_ghapi_interface::ApiError,
    },
}

impl From<planbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: planbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
