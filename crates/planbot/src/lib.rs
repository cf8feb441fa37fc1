//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use planbot_config::Config;
use planbot_logging::configure_logging;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        repository = %config.repository,
        "planbot starting"
    );

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
