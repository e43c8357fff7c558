/*
[INPUT]:  Selected server, module toggles, webhook channel selections
[OUTPUT]: Local module/webhook view kept in sync with the backend
[POS]:    Settings layer - server module page state
[UPDATE]: When modules/webhooks are added or sync rules change
*/

use std::sync::Arc;

use guildboard_adapter::{
    GuildApi, GuildSettings, ModuleKind, ModuleUpdate, Server, TextChannel, WebhookKind, WebhookUpdate,
};
use tracing::{debug, info, warn};

use crate::notify::{Notifier, Toast};

/// Module toggle states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleToggles {
    pub mint_info: bool,
    pub token: bool,
}

impl ModuleToggles {
    pub fn get(&self, module: ModuleKind) -> bool {
        match module {
            ModuleKind::MintInfo => self.mint_info,
            ModuleKind::Token => self.token,
        }
    }

    pub fn set(&mut self, module: ModuleKind, enabled: bool) {
        match module {
            ModuleKind::MintInfo => self.mint_info = enabled,
            ModuleKind::Token => self.token = enabled,
        }
    }
}

/// Selected channel per webhook; empty means unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookChannels {
    pub daily_mints: String,
    pub one_hour_mint_info: String,
    pub analytics: String,
}

impl WebhookChannels {
    pub fn get(&self, webhook: WebhookKind) -> &str {
        match webhook {
            WebhookKind::DailyMints => &self.daily_mints,
            WebhookKind::OneHourMintInfo => &self.one_hour_mint_info,
            WebhookKind::Analytics => &self.analytics,
        }
    }

    pub fn set(&mut self, webhook: WebhookKind, channel: impl Into<String>) {
        let channel = channel.into();
        match webhook {
            WebhookKind::DailyMints => self.daily_mints = channel,
            WebhookKind::OneHourMintInfo => self.one_hour_mint_info = channel,
            WebhookKind::Analytics => self.analytics = channel,
        }
    }
}

/// Local view of a server's module settings
///
/// Remote mutations are applied locally only after the backend accepted
/// them; failures leave the view untouched and present a toast.
pub struct ServerModulePage {
    api: Arc<dyn GuildApi>,
    notifier: Arc<dyn Notifier>,
    server: Option<Server>,
    modules: ModuleToggles,
    webhooks: WebhookChannels,
    channels: Option<Vec<TextChannel>>,
    loading: bool,
    busy: bool,
}

impl ServerModulePage {
    pub fn new(api: Arc<dyn GuildApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            server: None,
            modules: ModuleToggles::default(),
            webhooks: WebhookChannels::default(),
            channels: None,
            loading: false,
            busy: false,
        }
    }

    pub fn server(&self) -> Option<&Server> {
        self.server.as_ref()
    }

    pub fn modules(&self) -> ModuleToggles {
        self.modules
    }

    pub fn webhooks(&self) -> &WebhookChannels {
        &self.webhooks
    }

    pub fn channels(&self) -> Option<&[TextChannel]> {
        self.channels.as_deref()
    }

    /// Initial fetch in progress
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A mutation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Select a server and pull its settings
    ///
    /// Returns whether remote settings were applied. Without a server
    /// nothing is fetched.
    pub async fn load(&mut self, server: Option<Server>) -> bool {
        let Some(server) = server else {
            debug!("no server selected; skipping guild fetch");
            return false;
        };

        self.loading = true;
        let guild_id = server.id.clone();
        self.server = Some(server);

        let applied = match self.api.get_guild(&guild_id).await {
            Ok(settings) => {
                self.reconcile(settings);
                info!(guild_id = %guild_id, "guild settings loaded");
                true
            }
            Err(err) => {
                warn!(guild_id = %guild_id, error = %err, "failed to load guild settings");
                self.notifier.present(Toast::from_error(&err));
                false
            }
        };

        self.loading = false;
        applied
    }

    fn reconcile(&mut self, settings: GuildSettings) {
        for module in ModuleKind::ALL {
            self.modules.set(module, settings.module_enabled(module));
        }
        for webhook in WebhookKind::ALL {
            self.webhooks
                .set(webhook, settings.webhook_channel(webhook).unwrap_or_default());
        }
        self.channels = settings.text_channels;
    }

    /// Toggle a module remotely, then locally on success
    pub async fn enable_module(&mut self, module: ModuleKind, enabled: bool) -> bool {
        let Some(guild_id) = self.server.as_ref().map(|server| server.id.clone()) else {
            return false;
        };

        self.busy = true;
        let update = ModuleUpdate { module, enabled };
        let applied = match self.api.set_module(&guild_id, &update).await {
            Ok(_) => {
                self.modules.set(module, enabled);
                true
            }
            Err(err) => {
                warn!(guild_id = %guild_id, %module, enabled, error = %err, "module update failed");
                self.notifier.present(Toast::from_error(&err));
                false
            }
        };

        self.loading = false;
        self.busy = false;
        applied
    }

    /// Bind a webhook remotely, then locally on success
    pub async fn update_webhook(&mut self, webhook: WebhookKind, channel: impl Into<String>) -> bool {
        let Some(guild_id) = self.server.as_ref().map(|server| server.id.clone()) else {
            return false;
        };

        self.busy = true;
        let update = WebhookUpdate {
            webhook,
            channel: channel.into(),
        };
        let applied = match self.api.set_webhook(&guild_id, &update).await {
            Ok(_) => {
                self.webhooks.set(webhook, update.channel);
                true
            }
            Err(err) => {
                warn!(guild_id = %guild_id, %webhook, error = %err, "webhook update failed");
                self.notifier.present(Toast::from_error(&err));
                false
            }
        };

        self.loading = false;
        self.busy = false;
        applied
    }

    /// Why `channel` cannot be offered for `webhook`, if it cannot
    ///
    /// A webhook dropdown only exists while its module is enabled, and it
    /// lists the guild's text channels plus an empty "unset" entry.
    pub fn webhook_binding_error(&self, webhook: WebhookKind, channel: &str) -> Option<String> {
        let owner = webhook.module();
        if !self.modules.get(owner) {
            return Some(format!(
                "{} is disabled; enable it before binding {}",
                owner.label(),
                webhook.label()
            ));
        }
        if !channel.is_empty() && self.channels.is_some() && self.channel_name(channel).is_none() {
            let guild_id = self.server.as_ref().map(|server| server.id.as_str()).unwrap_or_default();
            return Some(format!("channel {} is not a text channel of guild {}", channel, guild_id));
        }
        None
    }

    /// Webhook dropdowns shown for the enabled modules
    pub fn visible_webhooks(&self) -> Vec<WebhookKind> {
        ModuleKind::ALL
            .iter()
            .filter(|module| self.modules.get(**module))
            .flat_map(|module| module.webhooks().iter().copied())
            .collect()
    }

    /// `(id, name)` pairs offered by every webhook dropdown
    pub fn channel_options(&self) -> Vec<(&str, &str)> {
        self.channels
            .iter()
            .flatten()
            .map(|channel| (channel.id.as_str(), channel.name.as_str()))
            .collect()
    }

    /// Display name of a channel id, if known
    pub fn channel_name(&self, channel_id: &str) -> Option<&str> {
        self.channels
            .iter()
            .flatten()
            .find(|channel| channel.id == channel_id)
            .map(|channel| channel.name.as_str())
    }
}
