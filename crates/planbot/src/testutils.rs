use std::io::Write;

use clap::Parser;
use planbot_config::Config;
use planbot_ghapi_interface::MockApiService;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config {
                github_api_connect_timeout: 5000,
                github_api_root_url: "https://api.github.com".into(),
                github_token: "test-token".into(),
                logging_use_bunyan: false,
                repository: "owner/name".into(),
            },
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context<W: Write>(self, writer: W) -> CommandContext<W> {
        CommandContext {
            config: self.config,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let mut buf = Vec::new();

    {
        let command_args = {
            let mut tmp_args = vec!["planbot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(&mut buf))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    std::str::from_utf8(buf.as_slice()).unwrap().to_string()
}
