/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public guildboard adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod http;
pub mod rpc;
pub mod types;

pub use api::{BalanceApi, GuildApi, WhitelistApi};

// Re-export commonly used types from http
pub use http::{ClientConfig, GuildboardClient, GuildboardError, Result};

// Re-export commonly used types from rpc
pub use rpc::{EvmRpcClient, format_ether};

// Re-export all types
pub use types::*;
