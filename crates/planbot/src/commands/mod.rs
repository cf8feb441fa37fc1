//! Commands.

use std::io::Write;

use async_trait::async_trait;
use clap::Subcommand;
use planbot_config::Config;
use planbot_ghapi_interface::ApiService;

use self::seed::SeedCommand;
use crate::Result;

mod seed;

pub(crate) struct CommandContext<W: Write> {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub writer: W,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Seed(SeedCommand),
}

#[async_trait(?Send)]
impl Command for SubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Seed(sub) => sub.execute(ctx).await,
        }
    }
}
