/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Guild settings, whitelist partnership and balance operations
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use guildboard_admin::AdminConfig;
use guildboard_admin::logging::init_tracing;

use crate::cli::commands::{BalanceArgs, GuildCommand, WhitelistCommand};

#[derive(Parser, Debug)]
#[command(name = "guildboard-admin", version, about = "Discord bot server module and whitelist administration")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Load and validate configuration, then exit
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a configuration file interactively
    Init {
        #[arg(long, value_name = "PATH", default_value = "guildboard.yaml")]
        output: PathBuf,
    },
    /// Server modules and webhook channels
    #[command(subcommand)]
    Guild(GuildCommand),
    /// Whitelist partnerships and roles
    #[command(subcommand)]
    Whitelist(WhitelistCommand),
    /// ERC-20 token balance of a wallet
    Balance(BalanceArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = &args.command {
        return cli::init::run_init(output.clone());
    }

    let config = AdminConfig::load(args.config_path.as_deref()).context("load config")?;
    let _log_guard = init_tracing(&args.log_level, config.log_dir.as_deref())?;

    info!(
        api_base_url = %config.api_base_url,
        rpc_url = %config.rpc_url,
        dry_run = args.dry_run,
        "starting guildboard-admin"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    match args.command {
        Some(Command::Guild(command)) => cli::commands::run_guild(&config, command).await,
        Some(Command::Whitelist(command)) => cli::commands::run_whitelist(&config, command).await,
        Some(Command::Balance(balance)) => cli::commands::run_balance(&config, balance).await,
        Some(Command::Init { .. }) => Ok(()),
        None => {
            info!("no command given; see --help");
            Ok(())
        }
    }
}
