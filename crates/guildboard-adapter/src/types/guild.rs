/*
[INPUT]:  Guild endpoint schemas (settings, modules, webhooks)
[OUTPUT]: Typed guild settings and mutation bodies
[POS]:    Data layer - per-server module and webhook types
[UPDATE]: When modules or webhook kinds are added on the backend
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Discord server selected in the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub permissions: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Server {
    /// Server known only by id (e.g. selected from the command line)
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            icon: None,
            owner: false,
            permissions: String::new(),
            features: Vec::new(),
        }
    }
}

/// Text channel a webhook can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChannel {
    pub id: String,
    pub name: String,
}

/// Payload of `GET /guilds/:id`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSettings {
    #[serde(default, deserialize_with = "null_as_false")]
    pub mint_info_module: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub token_module: bool,
    #[serde(default)]
    pub daily_mints_webhook_channel: Option<String>,
    #[serde(default)]
    pub one_hour_mint_info_webhook_channel: Option<String>,
    #[serde(default)]
    pub analytics_webhook_channel: Option<String>,
    #[serde(default)]
    pub text_channels: Option<Vec<TextChannel>>,
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl GuildSettings {
    pub fn module_enabled(&self, module: ModuleKind) -> bool {
        match module {
            ModuleKind::MintInfo => self.mint_info_module,
            ModuleKind::Token => self.token_module,
        }
    }

    pub fn webhook_channel(&self, webhook: WebhookKind) -> Option<&str> {
        match webhook {
            WebhookKind::DailyMints => self.daily_mints_webhook_channel.as_deref(),
            WebhookKind::OneHourMintInfo => self.one_hour_mint_info_webhook_channel.as_deref(),
            WebhookKind::Analytics => self.analytics_webhook_channel.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    kind: &'static str,
    value: String,
}

/// Feature module that can be toggled per server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    #[serde(rename = "mintInfoModule")]
    MintInfo,
    #[serde(rename = "tokenModule")]
    Token,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 2] = [ModuleKind::MintInfo, ModuleKind::Token];

    /// Wire name used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::MintInfo => "mintInfoModule",
            ModuleKind::Token => "tokenModule",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::MintInfo => "MintInfo Module",
            ModuleKind::Token => "Token Module",
        }
    }

    /// Webhooks configurable once this module is enabled
    pub fn webhooks(&self) -> &'static [WebhookKind] {
        match self {
            ModuleKind::MintInfo => &[WebhookKind::DailyMints, WebhookKind::OneHourMintInfo],
            ModuleKind::Token => &[WebhookKind::Analytics],
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mintInfoModule" | "mint-info" | "mint_info" => Ok(ModuleKind::MintInfo),
            "tokenModule" | "token" => Ok(ModuleKind::Token),
            other => Err(ParseKindError {
                kind: "module",
                value: other.to_string(),
            }),
        }
    }
}

/// Notification type a channel can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookKind {
    #[serde(rename = "dailyMintsWebhookChannel")]
    DailyMints,
    #[serde(rename = "oneHourMintInfoWebhookChannel")]
    OneHourMintInfo,
    #[serde(rename = "analyticsWebhookChannel")]
    Analytics,
}

impl WebhookKind {
    pub const ALL: [WebhookKind; 3] = [
        WebhookKind::DailyMints,
        WebhookKind::OneHourMintInfo,
        WebhookKind::Analytics,
    ];

    /// Wire name used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookKind::DailyMints => "dailyMintsWebhookChannel",
            WebhookKind::OneHourMintInfo => "oneHourMintInfoWebhookChannel",
            WebhookKind::Analytics => "analyticsWebhookChannel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebhookKind::DailyMints => "Daily Mints WebHook",
            WebhookKind::OneHourMintInfo => "OneHour MintInfo WebHook",
            WebhookKind::Analytics => "Analytics WebHook",
        }
    }

    /// Module that owns this webhook
    pub fn module(&self) -> ModuleKind {
        match self {
            WebhookKind::DailyMints | WebhookKind::OneHourMintInfo => ModuleKind::MintInfo,
            WebhookKind::Analytics => ModuleKind::Token,
        }
    }
}

impl fmt::Display for WebhookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dailyMintsWebhookChannel" | "daily-mints" | "daily_mints" => Ok(WebhookKind::DailyMints),
            "oneHourMintInfoWebhookChannel" | "one-hour-mint-info" | "one_hour_mint_info" => {
                Ok(WebhookKind::OneHourMintInfo)
            }
            "analyticsWebhookChannel" | "analytics" => Ok(WebhookKind::Analytics),
            other => Err(ParseKindError {
                kind: "webhook",
                value: other.to_string(),
            }),
        }
    }
}

/// Body of `POST /guilds/:id/modules`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleUpdate {
    pub module: ModuleKind,
    pub enabled: bool,
}

/// Body of `POST /guilds/:id/webhooks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookUpdate {
    pub webhook: WebhookKind,
    pub channel: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_settings_tolerates_nulls_and_missing_fields() {
        let settings: GuildSettings = serde_json::from_str(
            r#"{
                "mintInfoModule": true,
                "dailyMintsWebhookChannel": "111",
                "oneHourMintInfoWebhookChannel": null,
                "textChannels": [{"id": "111", "name": "mints"}]
            }"#,
        )
        .expect("decode settings");

        assert!(settings.module_enabled(ModuleKind::MintInfo));
        assert!(!settings.module_enabled(ModuleKind::Token));
        assert_eq!(settings.webhook_channel(WebhookKind::DailyMints), Some("111"));
        assert_eq!(settings.webhook_channel(WebhookKind::OneHourMintInfo), None);
        assert_eq!(settings.webhook_channel(WebhookKind::Analytics), None);
        assert_eq!(settings.text_channels.as_ref().map(Vec::len), Some(1));

        let settings: GuildSettings = serde_json::from_str(
            r#"{"mintInfoModule": null, "tokenModule": true, "textChannels": []}"#,
        )
        .expect("decode settings with null module");
        assert!(!settings.module_enabled(ModuleKind::MintInfo));
        assert!(settings.module_enabled(ModuleKind::Token));
        assert_eq!(settings.text_channels, Some(Vec::new()));
    }

    #[test]
    fn test_update_bodies_use_wire_names() {
        let module = serde_json::to_value(ModuleUpdate {
            module: ModuleKind::MintInfo,
            enabled: true,
        })
        .expect("encode module update");
        assert_eq!(module, serde_json::json!({"module": "mintInfoModule", "enabled": true}));

        let webhook = serde_json::to_value(WebhookUpdate {
            webhook: WebhookKind::Analytics,
            channel: "42".to_string(),
        })
        .expect("encode webhook update");
        assert_eq!(webhook, serde_json::json!({"webhook": "analyticsWebhookChannel", "channel": "42"}));
    }

    #[test]
    fn test_kind_parsing_accepts_aliases() {
        assert_eq!("token".parse::<ModuleKind>(), Ok(ModuleKind::Token));
        assert_eq!("mintInfoModule".parse::<ModuleKind>(), Ok(ModuleKind::MintInfo));
        assert_eq!("daily-mints".parse::<WebhookKind>(), Ok(WebhookKind::DailyMints));
        assert!("stakingModule".parse::<ModuleKind>().is_err());
    }

    #[test]
    fn test_webhooks_belong_to_their_module() {
        for module in ModuleKind::ALL {
            for webhook in module.webhooks() {
                assert_eq!(webhook.module(), module);
            }
        }
    }
}
