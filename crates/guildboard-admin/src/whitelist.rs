/*
[INPUT]:  Partnership records, uploads, server ids
[OUTPUT]: Backend partnership mutations with toast reporting
[POS]:    Whitelist layer - partnership create/update/read flow
[UPDATE]: When partnership flow or role lookup rules change
*/

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use guildboard_adapter::{
    GuildboardError, ImageSource, Role, WhitelistApi, WhitelistFormData, WhitelistPartnership,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::notify::{Notifier, Toast};

/// Whitelist partnership operations with failures surfaced as toasts
pub struct WhitelistService {
    api: Arc<dyn WhitelistApi>,
    notifier: Arc<dyn Notifier>,
}

impl WhitelistService {
    pub fn new(api: Arc<dyn WhitelistApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    pub fn prepare_form(
        &self,
        data: &WhitelistPartnership,
        upload: Option<ImageSource>,
        server_id: Option<&str>,
        discord_guild_id: Option<&str>,
    ) -> WhitelistFormData {
        WhitelistFormData::from_partnership(data, upload, server_id, discord_guild_id)
    }

    pub async fn create(&self, form: WhitelistFormData) -> Result<Value, GuildboardError> {
        let result = self.api.create_partnership(form).await;
        self.report(result, "create partnership")
    }

    pub async fn update(&self, id: &str, form: WhitelistFormData) -> Result<Value, GuildboardError> {
        let result = self.api.update_partnership(id, form).await;
        self.report(result, "update partnership")
    }

    pub async fn get(&self, id: &str) -> Result<WhitelistPartnership, GuildboardError> {
        let result = self.api.get_partnership(id).await;
        self.report(result, "get partnership")
    }

    /// Roles of the target server
    ///
    /// Any failure, including a server the bot cannot see, presents the
    /// roles toast.
    pub async fn roles(&self, server_id: &str) -> Result<Vec<Role>, GuildboardError> {
        match self.api.get_all_roles(server_id).await {
            Ok(roles) => {
                info!(server_id, count = roles.len(), "roles loaded");
                Ok(roles)
            }
            Err(err) => {
                warn!(server_id, error = %err, "roles unavailable");
                self.notifier.present(Toast::roles_unavailable());
                Err(err)
            }
        }
    }

    fn report<T>(&self, result: Result<T, GuildboardError>, action: &str) -> Result<T, GuildboardError> {
        if let Err(err) = &result {
            warn!(action, error = %err, "whitelist request failed");
            self.notifier.present(Toast::from_error(err));
        }
        result
    }
}

/// Read an image from disk as an upload part
pub async fn image_from_file(path: &Path) -> Result<ImageSource> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .map(str::to_string);

    Ok(ImageSource::Upload { file_name, mime, bytes })
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
