//! Solana RPC client - JSON-RPC account lookups against the devnet node

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::{AwakenError, BotError};
use crate::domain::entities::MintAddress;
use crate::domain::traits::ChainLookup;

/// Client for the node's JSON-RPC endpoint.
///
/// Constructed once at startup and shared across in-flight commands; the
/// underlying `reqwest::Client` pools connections and is safe for
/// concurrent use. Every request carries the configured timeout, and
/// expiry surfaces as `RpcUnavailable`.
pub struct SolanaRpcClient {
    url: String,
    client: Client,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'a str,
    id: u32,
    method: &'a str,
    params: (&'a str, AccountInfoConfig<'a>),
}

#[derive(Serialize)]
struct AccountInfoConfig<'a> {
    encoding: &'a str,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<AccountInfoResult>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct AccountInfoResult {
    /// `null` when no account exists at the address. The account payload
    /// itself is opaque to us; existence is all we need.
    value: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl SolanaRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::Internal(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Interpret a decoded getAccountInfo response.
    ///
    /// A well-formed response with `value: null` means "no account", which
    /// is an answer, not a failure. Anything structurally off is treated
    /// the same as the node being unreachable.
    fn interpret(response: RpcResponse) -> Result<bool, AwakenError> {
        if let Some(err) = response.error {
            return Err(AwakenError::RpcUnavailable(format!(
                "RPC error {}: {}",
                err.code, err.message
            )));
        }
        let result = response
            .result
            .ok_or_else(|| AwakenError::RpcUnavailable("response missing result".to_string()))?;
        Ok(result.value.is_some())
    }
}

#[async_trait]
impl ChainLookup for SolanaRpcClient {
    async fn account_exists(&self, address: &MintAddress) -> Result<bool, AwakenError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "getAccountInfo",
            params: (address.encoded(), AccountInfoConfig { encoding: "base64" }),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AwakenError::RpcUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AwakenError::RpcUnavailable(format!(
                "RPC status {}",
                response.status()
            )));
        }

        let decoded: RpcResponse = response
            .json()
            .await
            .map_err(|e| AwakenError::RpcUnavailable(e.to_string()))?;

        Self::interpret(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_payload_means_exists() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": {"slot": 12345},
                "value": {
                    "lamports": 1461600,
                    "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                    "data": ["", "base64"],
                    "executable": false,
                    "rentEpoch": 361
                }
            }
        }"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();
        assert!(SolanaRpcClient::interpret(response).unwrap());
    }

    #[test]
    fn null_value_means_absent_not_error() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"context": {"slot": 12345}, "value": null}
        }"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();
        assert!(!SolanaRpcClient::interpret(response).unwrap());
    }

    #[test]
    fn rpc_error_member_surfaces_as_unavailable() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid param: WrongSize"}
        }"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            SolanaRpcClient::interpret(response),
            Err(AwakenError::RpcUnavailable(_))
        ));
    }

    #[test]
    fn missing_result_surfaces_as_unavailable() {
        let body = r#"{"jsonrpc": "2.0", "id": 1}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            SolanaRpcClient::interpret(response),
            Err(AwakenError::RpcUnavailable(_))
        ));
    }
}
