//! Seeding domain.
//!
//! Use cases and the embedded project plan.

mod errors;
pub mod plan;
pub mod use_cases;

pub use errors::{DomainError, Result};
