/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AdminConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::PathBuf;

use guildboard_admin::config::{AdminConfig, WalletConfig};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to guildboard-admin init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a new configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = AdminConfig::default();

    let api_base_url: String = Input::with_theme(&theme)
        .with_prompt("Bot backend URL")
        .default(defaults.api_base_url.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            url::Url::parse(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;

    println!("\n{}", style("--- Wallet balance ---").bold());
    let rpc_url: String = Input::with_theme(&theme)
        .with_prompt("EVM JSON-RPC URL")
        .default(defaults.rpc_url.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            url::Url::parse(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;

    let wallet = if Confirm::with_theme(&theme)
        .with_prompt("Configure a default wallet for `balance`?")
        .default(false)
        .interact()?
    {
        let contract: String = Input::with_theme(&theme)
            .with_prompt("ERC-20 contract address")
            .interact_text()?;
        let owner: String = Input::with_theme(&theme)
            .with_prompt("Holder address")
            .interact_text()?;
        Some(WalletConfig { contract, owner })
    } else {
        None
    };

    let config = AdminConfig {
        api_base_url,
        rpc_url,
        wallet,
        ..defaults
    };
    config.validate()?;

    let yaml = config.to_yaml()?;
    std::fs::write(&output, yaml)
        .context(format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());

    Ok(())
}
