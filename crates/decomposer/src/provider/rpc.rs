//! Minimal JSON-RPC 2.0 client for read-only contract calls.
//!
//! Only `eth_call` against the `latest` block is needed; every contract read
//! is a single HTTP POST with no client-side state between requests.

use std::time::Duration;

use alloy_primitives::{Address, Bytes};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ChainError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const JSONRPC_VERSION: &str = "2.0";
const ETH_CALL: &str = "eth_call";
const BLOCK_TAG: &str = "latest";

// ============================================================================
// Wire Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

/// Transaction object for `eth_call`
#[derive(Debug, Serialize)]
struct CallRequest {
    to: Address,
    data: Bytes,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Bytes>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

// ============================================================================
// JsonRpcClient
// ============================================================================

/// HTTP JSON-RPC client bound to one endpoint.
///
/// Construct once and share behind an `Arc`; `reqwest::Client` pools
/// connections internally.
pub struct JsonRpcClient {
    client: Client,
    endpoint: String,
}

impl JsonRpcClient {
    /// Create a client for `endpoint` with the default 30 second timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a read-only call of `data` against contract `to`.
    ///
    /// Returns the raw ABI-encoded return data, which is empty when `to` has
    /// no code.
    pub async fn call(&self, to: Address, data: Vec<u8>) -> Result<Bytes, ChainError> {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method: ETH_CALL,
            params: (
                CallRequest {
                    to,
                    data: data.into(),
                },
                BLOCK_TAG,
            ),
        };

        debug!("{} to {} via {}", ETH_CALL, to, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChainError::Timeout {
                        method: ETH_CALL.to_string(),
                    }
                } else {
                    ChainError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} to {} failed with HTTP {}", ETH_CALL, to, status);
            return Err(ChainError::Http {
                status: status.as_u16(),
            });
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;

        match body {
            RpcResponse {
                error: Some(error), ..
            } => {
                warn!(
                    "{} to {} returned RPC error {}: {}",
                    ETH_CALL, to, error.code, error.message
                );
                Err(ChainError::Rpc {
                    code: error.code,
                    message: error.message,
                })
            }
            RpcResponse {
                result: Some(result),
                ..
            } => Ok(result),
            RpcResponse { .. } => Err(ChainError::InvalidResponse(
                "response has neither result nor error".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn target() -> Address {
        Address::with_last_byte(0x42)
    }

    #[tokio::test]
    async fn test_call_returns_result_bytes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [
                    {
                        "to": "0x0000000000000000000000000000000000000042",
                        "data": "0x95d89b41"
                    },
                    "latest"
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x00ff"
            })))
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        let result = client
            .call(target(), vec![0x95, 0xd8, 0x9b, 0x41])
            .await
            .unwrap();
        assert_eq!(result.to_vec(), vec![0x00u8, 0xff]);
    }

    #[tokio::test]
    async fn test_empty_result_is_returned_as_empty_bytes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x"
            })))
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        let result = client.call(target(), vec![]).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_rpc_error_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": 3, "message": "execution reverted" }
            })))
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        match client.call(target(), vec![]).await {
            Err(ChainError::Rpc { code, message }) => {
                assert_eq!(code, 3);
                assert_eq!(message, "execution reverted");
            }
            other => panic!("Expected Rpc error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        match client.call(target(), vec![]).await {
            Err(error @ ChainError::Http { status: 503 }) => assert!(error.is_retryable()),
            other => panic!("Expected Http 503, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        assert!(matches!(
            client.call(target(), vec![]).await,
            Err(ChainError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_envelope_without_result_or_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "jsonrpc": "2.0", "id": 1 })),
            )
            .mount(&server)
            .await;

        let client = JsonRpcClient::new(server.uri());
        assert!(matches!(
            client.call(target(), vec![]).await,
            Err(ChainError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": "0x" })),
            )
            .mount(&server)
            .await;

        let client = JsonRpcClient::with_timeout(server.uri(), Duration::from_millis(50));
        match client.call(target(), vec![]).await {
            Err(ChainError::Timeout { method }) => assert_eq!(method, "eth_call"),
            other => panic!("Expected Timeout, got: {:?}", other),
        }
    }
}
