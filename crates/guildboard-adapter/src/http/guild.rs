/*
[INPUT]:  Guild id, module toggles, webhook channel bindings
[OUTPUT]: Guild settings and mutation acknowledgements
[POS]:    HTTP layer - per-server module endpoints
[UPDATE]: When adding new guild endpoints or changing request bodies
*/

use crate::http::{GuildboardClient, Result};
use crate::types::{ApiEnvelope, GuildSettings, ModuleUpdate, WebhookUpdate};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

impl GuildboardClient {
    /// Fetch a server's module and webhook settings
    ///
    /// GET /guilds/{id}
    pub async fn get_guild(&self, guild_id: &str) -> Result<GuildSettings> {
        let endpoint = format!("/guilds/{}", guild_id);
        let builder = self.request(Method::GET, &endpoint)?;
        let envelope: ApiEnvelope<GuildSettings> = self.send_json(builder).await?;
        Ok(envelope.into_data())
    }

    /// Enable or disable a module
    ///
    /// POST /guilds/{id}/modules
    pub async fn set_module(&self, guild_id: &str, update: &ModuleUpdate) -> Result<Value> {
        let endpoint = format!("/guilds/{}/modules", guild_id);
        let builder = self.request(Method::POST, &endpoint)?.json(update);
        let response = self.send_json(builder).await?;
        info!(guild_id, module = %update.module, enabled = update.enabled, "module updated");
        Ok(response)
    }

    /// Bind a webhook to a text channel
    ///
    /// POST /guilds/{id}/webhooks
    pub async fn set_webhook(&self, guild_id: &str, update: &WebhookUpdate) -> Result<Value> {
        let endpoint = format!("/guilds/{}/webhooks", guild_id);
        let builder = self.request(Method::POST, &endpoint)?.json(update);
        let response = self.send_json(builder).await?;
        info!(guild_id, webhook = %update.webhook, channel = %update.channel, "webhook updated");
        Ok(response)
    }
}
