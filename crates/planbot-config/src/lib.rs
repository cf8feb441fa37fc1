//! Config module.

use std::env;

/// Default target repository when `GITHUB_REPOSITORY` is unset.
pub const DEFAULT_REPOSITORY: &str = "cpetrula/bolt-ai-group";

/// Seeder configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API connect timeout (in milliseconds).
    pub github_api_connect_timeout: u64,
    /// GitHub API root URL.
    pub github_api_root_url: String,
    /// GitHub API personal token.
    pub github_token: String,
    /// Use bunyan logging.
    pub logging_use_bunyan: bool,
    /// Target repository ("owner/name").
    pub repository: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env() -> Config {
        Config {
            github_api_connect_timeout: env_to_u64("PLANBOT_GITHUB_API_CONNECT_TIMEOUT", 5000),
            github_api_root_url: env_to_str(
                "PLANBOT_GITHUB_API_ROOT_URL",
                "https://api.github.com",
            ),
            github_token: env_first_to_str(&["GH_TOKEN", "GITHUB_TOKEN"], ""),
            logging_use_bunyan: env_to_bool("PLANBOT_LOGGING_USE_BUNYAN", false),
            repository: env_to_str("GITHUB_REPOSITORY", DEFAULT_REPOSITORY),
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

/// Read the first set variable among `names`, in order.
fn env_first_to_str(names: &[&str], default: &str) -> String {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
        .unwrap_or_else(|| default.to_string())
}
