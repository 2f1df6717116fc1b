use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        environment,
        base_url,
        api_key,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(environment, base_url, api_key, json, verbose)?;
    tracing::debug!(environment = %ctx.environment, base_url = ctx.base_url(), "context ready");

    match command {
        Command::Sync(args) => commands::sync::run(&ctx, args).await,
        Command::Set(args) => commands::set::run(&ctx, args).await,
        Command::Ls => commands::ls::run(&ctx).await,
        Command::Logs(args) => commands::logs::run(&ctx, args.command).await,
        Command::Auth(args) => commands::auth::run(&ctx, args.command).await,
    }
}
