/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for guildboard-adapter tests

use guildboard_adapter::{ClientConfig, EvmRpcClient, GuildboardClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Backend client pointed at the mock server
pub fn backend_client(server: &MockServer) -> GuildboardClient {
    GuildboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// JSON-RPC client pointed at the mock server
#[allow(dead_code)]
pub fn rpc_client(server: &MockServer) -> EvmRpcClient {
    EvmRpcClient::with_url(ClientConfig::default(), &server.uri()).expect("rpc client init")
}

/// Guild settings payload as served by the backend
pub fn guild_payload() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "mintInfoModule": false,
            "tokenModule": true,
            "dailyMintsWebhookChannel": null,
            "oneHourMintInfoWebhookChannel": null,
            "analyticsWebhookChannel": "300",
            "textChannels": [
                {"id": "300", "name": "token-analytics"},
                {"id": "301", "name": "general"}
            ]
        }
    })
}
