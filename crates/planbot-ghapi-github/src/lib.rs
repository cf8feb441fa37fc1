//! GitHub API implementation.
//!
//! Talks to the GitHub REST API over HTTP.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod github;

pub use errors::GitHubError;
pub use github::GithubApiService;
