/*
[INPUT]:  Whitelist partnership records and uploaded images
[OUTPUT]: Typed partnership/role structs and multipart form assembly
[POS]:    Data layer - whitelist partnership types
[UPDATE]: When partnership fields or form rules change
*/

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::http::Result;

/// Cross-server whitelist agreement managed by the bot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhitelistPartnership {
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub source_server: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub target_server: Option<String>,
    #[serde(rename = "imagePath", default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Remaining backend fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Discord role of a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(deserialize_with = "required_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `GET /getAllRoles/:id`; `data` is null when the bot is not in the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RolesEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Role>>,
}

/// Image attached to a partnership form
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Image already hosted by the backend
    Path(String),
    /// Fresh upload
    Upload {
        file_name: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Multipart form body for partnership create/update
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhitelistFormData {
    fields: Vec<(String, String)>,
    image: Option<ImageSource>,
}

impl WhitelistFormData {
    /// Assemble the form sent to the backend
    ///
    /// `id`, `imagePath` and the raw image never travel as text fields, falsy
    /// values are skipped, and the servers fall back to the ids of the
    /// current page when the record has none.
    pub fn from_partnership(
        data: &WhitelistPartnership,
        upload: Option<ImageSource>,
        server_id: Option<&str>,
        discord_guild_id: Option<&str>,
    ) -> Self {
        let mut fields = Vec::new();

        for (key, value) in &data.extra {
            if matches!(key.as_str(), "image" | "id" | "imagePath" | "source_server" | "target_server") {
                continue;
            }
            if let Some(text) = truthy_text(value) {
                fields.push((key.clone(), text));
            }
        }

        let source_server = non_empty(data.source_server.as_deref()).or(non_empty(server_id));
        if let Some(source) = source_server {
            fields.push(("source_server".to_string(), source.to_string()));
        }

        let target_server = non_empty(data.target_server.as_deref()).or(non_empty(discord_guild_id));
        if let Some(target) = target_server {
            fields.push(("target_server".to_string(), target.to_string()));
        }

        let image = match non_empty(data.image_path.as_deref()) {
            Some(path) => Some(ImageSource::Path(path.to_string())),
            None => upload,
        };

        Self { fields, image }
    }

    /// Text fields in send order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// Convert into a reqwest multipart form
    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for (key, value) in self.fields {
            form = form.text(key, value);
        }

        match self.image {
            Some(ImageSource::Path(path)) => {
                form = form.text("image", path);
            }
            Some(ImageSource::Upload { file_name, mime, bytes }) => {
                let mut part = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime {
                    part = part.mime_str(&mime)?;
                }
                form = form.part("image", part);
            }
            None => {}
        }

        Ok(form)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Text form of a JSON value, or `None` when the value is falsy
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn required_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string or number id, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn partnership(value: Value) -> WhitelistPartnership {
        serde_json::from_value(value).expect("decode partnership")
    }

    #[rstest]
    #[case(json!(null), None)]
    #[case(json!(false), None)]
    #[case(json!(0), None)]
    #[case(json!(""), None)]
    #[case(json!(true), Some("true"))]
    #[case(json!(25), Some("25"))]
    #[case(json!("mint"), Some("mint"))]
    fn test_truthy_text(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(truthy_text(&value).as_deref(), expected);
    }

    #[test]
    fn test_form_drops_identity_and_image_fields() {
        let data = partnership(json!({
            "id": 7,
            "imagePath": "https://cdn.example/wl.png",
            "image": {"size": 10},
            "wl_role": "role-1",
            "max_users": 0,
            "description": ""
        }));

        let form = WhitelistFormData::from_partnership(&data, None, Some("srv-1"), Some("guild-9"));

        assert_eq!(form.field("id"), None);
        assert_eq!(form.field("imagePath"), None);
        assert_eq!(form.field("image"), None);
        assert_eq!(form.field("max_users"), None);
        assert_eq!(form.field("description"), None);
        assert_eq!(form.field("wl_role"), Some("role-1"));
        assert_eq!(
            form.image(),
            Some(&ImageSource::Path("https://cdn.example/wl.png".to_string()))
        );
    }

    #[test]
    fn test_form_server_fallbacks() {
        let data = partnership(json!({"source_server": "", "wl_role": "r"}));
        let form = WhitelistFormData::from_partnership(&data, None, Some("srv-1"), Some("guild-9"));
        assert_eq!(form.field("source_server"), Some("srv-1"));
        assert_eq!(form.field("target_server"), Some("guild-9"));

        let data = partnership(json!({"source_server": "a", "target_server": "b"}));
        let form = WhitelistFormData::from_partnership(&data, None, Some("srv-1"), Some("guild-9"));
        assert_eq!(form.field("source_server"), Some("a"));
        assert_eq!(form.field("target_server"), Some("b"));

        let form = WhitelistFormData::from_partnership(&WhitelistPartnership::default(), None, None, None);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_partnership_accepts_numeric_server_ids() {
        let data = partnership(json!({"id": 5, "source_server": 123, "target_server": 456}));
        assert_eq!(data.id.as_deref(), Some("5"));
        assert_eq!(data.source_server.as_deref(), Some("123"));
        assert_eq!(data.target_server.as_deref(), Some("456"));

        let form = WhitelistFormData::from_partnership(&data, None, Some("srv-1"), Some("guild-9"));
        assert_eq!(form.field("source_server"), Some("123"));
        assert_eq!(form.field("target_server"), Some("456"));
    }

    #[test]
    fn test_form_uses_upload_without_image_path() {
        let upload = ImageSource::Upload {
            file_name: "wl.png".to_string(),
            mime: Some("image/png".to_string()),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        };
        let form = WhitelistFormData::from_partnership(
            &WhitelistPartnership::default(),
            Some(upload.clone()),
            Some("srv-1"),
            None,
        );
        assert_eq!(form.image(), Some(&upload));
        assert!(form.into_multipart().is_ok());
    }

    #[test]
    fn test_role_accepts_numeric_id() {
        let roles: RolesEnvelope = serde_json::from_value(json!({
            "data": [{"id": 123, "name": "OG", "color": 0}]
        }))
        .expect("decode roles");
        let roles = roles.data.expect("roles present");
        assert_eq!(roles[0].id, "123");
        assert_eq!(roles[0].extra.get("color"), Some(&json!(0)));

        let missing: RolesEnvelope = serde_json::from_value(json!({"data": null})).expect("decode");
        assert!(missing.data.is_none());
    }
}
