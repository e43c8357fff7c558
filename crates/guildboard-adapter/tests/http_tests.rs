/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for backend and RPC clients
[POS]:    Integration tests - HTTP endpoints through the public API
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{backend_client, guild_payload, rpc_client, setup_mock_server};
use guildboard_adapter::{
    ClientConfig, GuildApi, GuildboardClient, GuildboardError, ModuleKind, ModuleUpdate,
    WhitelistApi, WhitelistFormData, WhitelistPartnership,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(GuildboardClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let client = assert_ok!(GuildboardClient::with_config_and_base_url(config, "https://bot.example/api/"));
    assert_eq!(client.base_url().as_str(), "https://bot.example/api/");
}

#[tokio::test]
async fn test_guild_api_trait_object() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/guilds/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guild_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let api: Box<dyn GuildApi> = Box::new(backend_client(&server));
    let settings = assert_ok!(api.get_guild("77").await);

    assert!(settings.token_module);
    assert_eq!(settings.analytics_webhook_channel.as_deref(), Some("300"));
}

#[tokio::test]
async fn test_module_failure_surfaces_user_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/guilds/77/modules"))
        .and(body_json(serde_json::json!({"module": "mintInfoModule", "enabled": true})))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "body": "You are not allowed to manage this server"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = backend_client(&server);
    let update = ModuleUpdate {
        module: ModuleKind::MintInfo,
        enabled: true,
    };
    let err = client.set_module("77", &update).await.expect_err("should fail");

    assert!(err.is_api_error());
    assert_eq!(err.user_message(), "You are not allowed to manage this server");
}

#[tokio::test]
async fn test_unreachable_backend_falls_back_to_connect_message() {
    let server = setup_mock_server().await;
    let uri = server.uri();
    drop(server);

    let client = assert_ok!(GuildboardClient::with_config_and_base_url(ClientConfig::default(), &uri));
    let err = client.get_guild("77").await.expect_err("should fail");

    assert!(matches!(err, GuildboardError::Http(_)));
    assert_eq!(err.user_message(), "Unable to connect. Please try again later");
}

#[tokio::test]
async fn test_whitelist_round_trip_through_trait() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/getWhitelistPartnership/wl-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"id": 5, "source_server": "srv-1", "wl_role": "role-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/updateWhitelistPartnership/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let api: Box<dyn WhitelistApi> = Box::new(backend_client(&server));
    let partnership: WhitelistPartnership = assert_ok!(api.get_partnership("wl-5").await);
    assert_eq!(partnership.id.as_deref(), Some("5"));

    let form = WhitelistFormData::from_partnership(&partnership, None, None, Some("guild-2"));
    assert_eq!(form.field("target_server"), Some("guild-2"));

    let id = partnership.id.clone().unwrap_or_default();
    let response = assert_ok!(api.update_partnership(&id, form).await);
    assert_eq!(response["data"], "updated");
}

#[tokio::test]
async fn test_rpc_balance_of_zero() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": format!("0x{}", "0".repeat(64))
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balance = assert_ok!(
        rpc_client(&server)
            .token_balance(
                "0x55d398326f99059ff775485246999027b3197955",
                "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            )
            .await
    );
    assert_eq!(balance, "0");
}
