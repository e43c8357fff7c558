/*
[INPUT]:  Error sources (HTTP, API, serialization, JSON-RPC, address parsing)
[OUTPUT]: Structured error types with user-facing message helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback shown to users when the backend gave no readable reason
pub const CONNECT_FALLBACK_MESSAGE: &str = "Unable to connect. Please try again later";

/// Main error type for the guildboard adapter
#[derive(Error, Debug)]
pub enum GuildboardError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON-RPC node returned an error object
    #[error("RPC error (code {code}): {message}")]
    Rpc { code: i64, message: String },

    /// EVM address could not be parsed
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Role listing came back without any roles
    #[error("No roles returned for server {server_id}")]
    RolesUnavailable { server_id: String },
}

impl GuildboardError {
    /// Check if the backend answered with an error body
    pub fn is_api_error(&self) -> bool {
        matches!(self, GuildboardError::Api { .. })
    }

    /// Message suitable for a toast notification
    ///
    /// Backend errors carry their own readable reason; everything else
    /// collapses into the generic connection fallback.
    pub fn user_message(&self) -> String {
        match self {
            GuildboardError::Api { message, .. } => message.clone(),
            _ => CONNECT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        GuildboardError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for guildboard operations
pub type Result<T> = std::result::Result<T, GuildboardError>;
