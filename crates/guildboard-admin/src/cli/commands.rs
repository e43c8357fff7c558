/*
[INPUT]:  Guild/whitelist/balance subcommands and admin configuration
[OUTPUT]: Backend mutations and console reports
[POS]:    CLI layer - command handlers
[UPDATE]: When subcommands or their output change
*/

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Subcommand};
use console::style;
use guildboard_adapter::{
    EvmRpcClient, GuildboardClient, ModuleKind, Server, WebhookKind, WhitelistPartnership,
};
use tracing::info;

use guildboard_admin::notify::{ConsoleNotifier, Notifier, Toast};
use guildboard_admin::whitelist::image_from_file;
use guildboard_admin::{AdminConfig, ServerModulePage, TokenBalance, WhitelistService};

#[derive(Subcommand, Debug)]
pub enum GuildCommand {
    /// Show module toggles, webhook channels and text channels
    Show { guild_id: String },
    /// Enable or disable a module
    Module {
        guild_id: String,
        /// mintInfoModule | tokenModule (or mint-info | token)
        module: ModuleKind,
        #[arg(value_parser = parse_switch)]
        state: bool,
    },
    /// Bind a webhook to a text channel ("" clears it)
    Webhook {
        guild_id: String,
        /// dailyMintsWebhookChannel | oneHourMintInfoWebhookChannel | analyticsWebhookChannel
        webhook: WebhookKind,
        channel: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum WhitelistCommand {
    /// Print a partnership as JSON
    Get { id: String },
    /// Create a partnership from a JSON record
    Create(FormArgs),
    /// Update a partnership from a JSON record
    Update {
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },
    /// List the roles of a server
    Roles { server_id: String },
}

#[derive(Args, Debug)]
pub struct FormArgs {
    /// JSON file holding the partnership fields
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
    /// Source server used when the record has none
    #[arg(long)]
    server_id: Option<String>,
    /// Target guild used when the record has none
    #[arg(long)]
    guild_id: Option<String>,
    /// Image to upload when the record has no imagePath
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// ERC-20 contract address (defaults to wallet.contract)
    contract: Option<String>,
    /// Holder address (defaults to wallet.owner)
    owner: Option<String>,
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "enable" | "enabled" | "1" => Ok(true),
        "off" | "false" | "disable" | "disabled" | "0" => Ok(false),
        other => Err(format!("expected on/off, got '{}'", other)),
    }
}

fn backend_client(config: &AdminConfig) -> Result<GuildboardClient> {
    GuildboardClient::with_config_and_base_url(config.client_config(), &config.api_base_url)
        .context("build backend client")
}

pub async fn run_guild(config: &AdminConfig, command: GuildCommand) -> Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let mut page = ServerModulePage::new(Arc::new(backend_client(config)?), notifier.clone());

    let guild_id = match &command {
        GuildCommand::Show { guild_id }
        | GuildCommand::Module { guild_id, .. }
        | GuildCommand::Webhook { guild_id, .. } => guild_id.clone(),
    };
    if !page.load(Some(Server::with_id(&guild_id))).await {
        bail!("could not load settings for guild {}", guild_id);
    }

    match command {
        GuildCommand::Show { .. } => {
            print_page(&page);
            Ok(())
        }
        GuildCommand::Module { module, state, .. } => {
            if !page.enable_module(module, state).await {
                bail!("module update rejected");
            }
            let verb = if state { "enabled" } else { "disabled" };
            notifier.present(Toast::success(format!("{} {}", module.label(), verb)));
            print_page(&page);
            Ok(())
        }
        GuildCommand::Webhook { webhook, channel, .. } => {
            if let Some(reason) = page.webhook_binding_error(webhook, &channel) {
                notifier.present(Toast::warning(reason.clone()));
                bail!(reason);
            }
            if !page.update_webhook(webhook, channel).await {
                bail!("webhook update rejected");
            }
            notifier.present(Toast::success(format!("{} updated", webhook.label())));
            print_page(&page);
            Ok(())
        }
    }
}

fn print_page(page: &ServerModulePage) {
    let title = page.server().map(|server| server.id.as_str()).unwrap_or_default();
    println!("{} {}", style("Server Management").bold().cyan(), style(title).dim());

    for module in ModuleKind::ALL {
        let state = if page.modules().get(module) {
            style("on").green()
        } else {
            style("off").red()
        };
        println!("  {:<20} {}", module.label(), state);
    }

    let visible = page.visible_webhooks();
    if !visible.is_empty() {
        println!("\n{}", style("Webhooks").bold());
        for webhook in visible {
            let channel_id = page.webhooks().get(webhook);
            let shown = if channel_id.is_empty() {
                style("unset".to_string()).dim()
            } else {
                let name = page.channel_name(channel_id).unwrap_or("?");
                style(format!("#{} ({})", name, channel_id))
            };
            println!("  {:<26} {}", webhook.label(), shown);
        }
    }

    let options = page.channel_options();
    if !options.is_empty() {
        println!("\n{}", style("Text channels").bold());
        for (id, name) in options {
            println!("  {:<22} #{}", id, name);
        }
    }
}

pub async fn run_whitelist(config: &AdminConfig, command: WhitelistCommand) -> Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let service = WhitelistService::new(Arc::new(backend_client(config)?), notifier.clone());

    match command {
        WhitelistCommand::Get { id } => {
            let partnership = service.get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&partnership)?);
        }
        WhitelistCommand::Create(args) => {
            let form = build_form(&service, &args).await?;
            service.create(form).await?;
            notifier.present(Toast::success("Whitelist partnership created"));
        }
        WhitelistCommand::Update { id, form } => {
            let form = build_form(&service, &form).await?;
            service.update(&id, form).await?;
            notifier.present(Toast::success("Whitelist partnership updated"));
        }
        WhitelistCommand::Roles { server_id } => {
            let roles = service.roles(&server_id).await?;
            for role in roles {
                println!("  {:<22} {}", role.id, role.name);
            }
        }
    }

    Ok(())
}

async fn build_form(
    service: &WhitelistService,
    args: &FormArgs,
) -> Result<guildboard_adapter::WhitelistFormData> {
    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("read {}", args.file.display()))?;
    let data: WhitelistPartnership = serde_json::from_str(&raw)
        .with_context(|| format!("parse partnership record {}", args.file.display()))?;

    let upload = match &args.image {
        Some(path) => Some(image_from_file(path).await?),
        None => None,
    };

    let form = service.prepare_form(&data, upload, args.server_id.as_deref(), args.guild_id.as_deref());
    info!(fields = form.fields().len(), has_image = form.image().is_some(), "partnership form prepared");
    Ok(form)
}

pub async fn run_balance(config: &AdminConfig, args: BalanceArgs) -> Result<()> {
    let wallet = config.wallet.as_ref();
    let contract = args
        .contract
        .or_else(|| wallet.map(|w| w.contract.clone()))
        .ok_or_else(|| anyhow!("no contract given and wallet.contract is not configured"))?;
    let owner = args
        .owner
        .or_else(|| wallet.map(|w| w.owner.clone()))
        .ok_or_else(|| anyhow!("no owner given and wallet.owner is not configured"))?;

    let rpc = EvmRpcClient::with_url(config.client_config(), &config.rpc_url).context("build rpc client")?;
    let mut tracker = TokenBalance::new();
    match tracker.refresh(&rpc, &contract, &owner).await {
        Some(balance) => {
            println!("{}", balance);
            Ok(())
        }
        None => bail!("balance unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("on"), Ok(true));
        assert_eq!(parse_switch("Disabled"), Ok(false));
        assert!(parse_switch("maybe").is_err());
    }
}
