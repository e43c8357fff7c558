/*
[INPUT]:  JSON-RPC endpoint URL, contract and owner addresses
[OUTPUT]: Raw and formatted ERC-20 balances
[POS]:    RPC layer - JSON-RPC transport over reqwest
[UPDATE]: When adding RPC methods or changing request framing
*/

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::U256;
use reqwest::{Client, Url};
use serde_json::json;
use tracing::{debug, warn};

use crate::http::{ClientConfig, GuildboardError, Result};
use crate::rpc::abi::{decode_uint256, encode_balance_of, format_ether, parse_address};
use crate::types::{CallRequest, JsonRpcRequest, JsonRpcResponse};

/// Public BNB Smart Chain endpoint
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.binance.org/";

/// Read-only JSON-RPC client for EVM chains
#[derive(Debug)]
pub struct EvmRpcClient {
    http_client: Client,
    url: Url,
    next_id: AtomicU64,
}

impl EvmRpcClient {
    /// Create a client against the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(ClientConfig::default(), DEFAULT_RPC_URL)
    }

    pub fn with_url(config: ClientConfig, url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: Url::parse(url)?,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `eth_call` against the latest block, returning the hex result
    pub async fn eth_call(&self, call: CallRequest) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, "eth_call", json!([call, "latest"]));
        debug!(id, to = %call.to, url = %self.url, "eth_call");

        let response = self.http_client.post(self.url.clone()).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "rpc endpoint returned error status");
            return Err(GuildboardError::api_error(status, text));
        }

        let body: JsonRpcResponse<String> = response.json().await?;
        if let Some(error) = body.error {
            warn!(code = error.code, message = %error.message, "rpc error");
            return Err(GuildboardError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result
            .ok_or_else(|| GuildboardError::InvalidResponse("rpc response without result".to_string()))
    }

    /// ERC-20 `balanceOf(owner)` in the token's smallest unit
    pub async fn balance_of(&self, contract: &str, owner: &str) -> Result<U256> {
        let contract = parse_address(contract)?;
        let owner = parse_address(owner)?;

        let call = CallRequest {
            to: format!("0x{}", hex::encode(contract.as_slice())),
            data: encode_balance_of(&owner),
        };
        let result = self.eth_call(call).await?;
        decode_uint256(&result)
    }

    /// ERC-20 balance converted from wei to an ether-denominated string
    pub async fn token_balance(&self, contract: &str, owner: &str) -> Result<String> {
        let wei = self.balance_of(contract, owner).await?;
        Ok(format_ether(wei))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CONTRACT: &str = "0x55d398326f99059fF775485246999027B3197955";
    const OWNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn client_for(server: &MockServer) -> EvmRpcClient {
        EvmRpcClient::with_url(ClientConfig::default(), &server.uri()).expect("client init")
    }

    #[tokio::test]
    async fn test_token_balance() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [{
                    "to": "0x55d398326f99059ff775485246999027b3197955",
                    "data": "0x70a08231000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266"
                }, "latest"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x00000000000000000000000000000000000000000000000014d1120d7b160000"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let balance = client_for(&server)
            .token_balance(CONTRACT, OWNER)
            .await
            .expect("token_balance failed");
        assert_eq!(balance, "1.5");
    }

    #[tokio::test]
    async fn test_rpc_error_object() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32000, "message": "execution reverted"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .balance_of(CONTRACT, OWNER)
            .await
            .expect_err("should fail");
        assert!(matches!(err, GuildboardError::Rpc { code: -32000, .. }));
    }

    #[tokio::test]
    async fn test_invalid_owner_never_hits_network() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .balance_of(CONTRACT, "not-an-address")
            .await
            .expect_err("should fail");
        assert!(matches!(err, GuildboardError::InvalidAddress { .. }));
    }
}
