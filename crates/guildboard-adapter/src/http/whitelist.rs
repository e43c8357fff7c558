/*
[INPUT]:  Partnership forms, partnership ids, server ids
[OUTPUT]: Partnership records, role lists, mutation acknowledgements
[POS]:    HTTP layer - whitelist partnership endpoints
[UPDATE]: When partnership endpoints or form rules change
*/

use crate::http::{GuildboardClient, GuildboardError, Result};
use crate::types::{ApiEnvelope, Role, RolesEnvelope, WhitelistFormData, WhitelistPartnership};
use reqwest::Method;
use serde_json::Value;
use tracing::{info, warn};

impl GuildboardClient {
    /// Create a whitelist partnership
    ///
    /// POST /createNewWhitelistPartnership (multipart)
    pub async fn create_whitelist_partnership(&self, form: WhitelistFormData) -> Result<Value> {
        let builder = self
            .request(Method::POST, "/createNewWhitelistPartnership")?
            .multipart(form.into_multipart()?);
        let response = self.send_json(builder).await?;
        info!("whitelist partnership created");
        Ok(response)
    }

    /// Update an existing whitelist partnership
    ///
    /// POST /updateWhitelistPartnership/{id} (multipart)
    pub async fn update_whitelist_partnership(&self, id: &str, form: WhitelistFormData) -> Result<Value> {
        let endpoint = format!("/updateWhitelistPartnership/{}", id);
        let builder = self
            .request(Method::POST, &endpoint)?
            .multipart(form.into_multipart()?);
        let response = self.send_json(builder).await?;
        info!(partnership_id = id, "whitelist partnership updated");
        Ok(response)
    }

    /// List the roles of a server the bot is a member of
    ///
    /// GET /getAllRoles/{id}
    ///
    /// A null `data` means the bot cannot see the server and is reported as
    /// [`GuildboardError::RolesUnavailable`].
    pub async fn get_all_roles(&self, server_id: &str) -> Result<Vec<Role>> {
        let endpoint = format!("/getAllRoles/{}", server_id);
        let builder = self.request(Method::GET, &endpoint)?;
        let envelope: RolesEnvelope = self.send_json(builder).await?;
        envelope.data.ok_or_else(|| {
            warn!(server_id, "roles response carried no data");
            GuildboardError::RolesUnavailable {
                server_id: server_id.to_string(),
            }
        })
    }

    /// Fetch a single whitelist partnership
    ///
    /// GET /getWhitelistPartnership/{id}
    pub async fn get_whitelist_partnership(&self, id: &str) -> Result<WhitelistPartnership> {
        let endpoint = format!("/getWhitelistPartnership/{}", id);
        let builder = self.request(Method::GET, &endpoint)?;
        let envelope: ApiEnvelope<WhitelistPartnership> = self.send_json(builder).await?;
        Ok(envelope.into_data())
    }
}
