/*
[INPUT]:  Backend operations used by higher-level flows
[OUTPUT]: Object-safe traits implemented by GuildboardClient
[POS]:    Seam between the HTTP client and state machines that drive it
[UPDATE]: When flows need new backend operations
*/

use async_trait::async_trait;
use serde_json::Value;

use crate::http::{GuildboardClient, Result};
use crate::rpc::EvmRpcClient;
use crate::types::{GuildSettings, ModuleUpdate, Role, WebhookUpdate, WhitelistFormData, WhitelistPartnership};

/// Guild settings operations
#[async_trait]
pub trait GuildApi: Send + Sync {
    async fn get_guild(&self, guild_id: &str) -> Result<GuildSettings>;

    async fn set_module(&self, guild_id: &str, update: &ModuleUpdate) -> Result<Value>;

    async fn set_webhook(&self, guild_id: &str, update: &WebhookUpdate) -> Result<Value>;
}

/// Whitelist partnership operations
#[async_trait]
pub trait WhitelistApi: Send + Sync {
    async fn create_partnership(&self, form: WhitelistFormData) -> Result<Value>;

    async fn update_partnership(&self, id: &str, form: WhitelistFormData) -> Result<Value>;

    async fn get_partnership(&self, id: &str) -> Result<WhitelistPartnership>;

    async fn get_all_roles(&self, server_id: &str) -> Result<Vec<Role>>;
}

/// ERC-20 balance lookups
#[async_trait]
pub trait BalanceApi: Send + Sync {
    /// Balance of `owner` in `contract`, formatted in ether units
    async fn token_balance(&self, contract: &str, owner: &str) -> Result<String>;
}

#[async_trait]
impl GuildApi for GuildboardClient {
    async fn get_guild(&self, guild_id: &str) -> Result<GuildSettings> {
        GuildboardClient::get_guild(self, guild_id).await
    }

    async fn set_module(&self, guild_id: &str, update: &ModuleUpdate) -> Result<Value> {
        GuildboardClient::set_module(self, guild_id, update).await
    }

    async fn set_webhook(&self, guild_id: &str, update: &WebhookUpdate) -> Result<Value> {
        GuildboardClient::set_webhook(self, guild_id, update).await
    }
}

#[async_trait]
impl WhitelistApi for GuildboardClient {
    async fn create_partnership(&self, form: WhitelistFormData) -> Result<Value> {
        self.create_whitelist_partnership(form).await
    }

    async fn update_partnership(&self, id: &str, form: WhitelistFormData) -> Result<Value> {
        self.update_whitelist_partnership(id, form).await
    }

    async fn get_partnership(&self, id: &str) -> Result<WhitelistPartnership> {
        self.get_whitelist_partnership(id).await
    }

    async fn get_all_roles(&self, server_id: &str) -> Result<Vec<Role>> {
        GuildboardClient::get_all_roles(self, server_id).await
    }
}

#[async_trait]
impl BalanceApi for EvmRpcClient {
    async fn token_balance(&self, contract: &str, owner: &str) -> Result<String> {
        EvmRpcClient::token_balance(self, contract, owner).await
    }
}
