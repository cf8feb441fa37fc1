use std::io::Write;

use clap::Parser;
use planbot_config::Config;
use planbot_ghapi_github::GithubApiService;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// GitHub project plan seeder
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "planbot")]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async {
            let api_service = GithubApiService::new(config.clone());
            let ctx = CommandContext {
                config,
                api_service: Box::new(api_service),
                writer: Box::new(std::io::stdout()),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async<W: Write>(
        args: Args,
        ctx: CommandContext<W>,
    ) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
