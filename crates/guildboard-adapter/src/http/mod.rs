/*
[INPUT]:  HTTP client configuration and backend endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod guild;
pub mod whitelist;

pub use error::{CONNECT_FALLBACK_MESSAGE, GuildboardError, Result};

pub use client::{ClientConfig, GuildboardClient};
