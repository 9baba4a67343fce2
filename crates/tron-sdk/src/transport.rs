//! Transport layer for the node's HTTP wallet API

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::SdkError;

/// Endpoint paths used by the client
pub mod path {
    /// Latest block
    pub const GET_NOW_BLOCK: &str = "wallet/getnowblock";
    /// Block by number
    pub const GET_BLOCK_BY_NUM: &str = "wallet/getblockbynum";
    /// Block range
    pub const GET_BLOCK_BY_LIMIT_NEXT: &str = "wallet/getblockbylimitnext";
    /// Account info
    pub const GET_ACCOUNT: &str = "wallet/getaccount";
    /// Read-only contract call
    pub const TRIGGER_CONSTANT_CONTRACT: &str = "wallet/triggerconstantcontract";
    /// State-changing contract call (returns an unsigned transaction)
    pub const TRIGGER_SMART_CONTRACT: &str = "wallet/triggersmartcontract";
    /// Contract metadata
    pub const GET_CONTRACT: &str = "wallet/getcontract";
    /// TRC10 token info
    pub const GET_ASSET_ISSUE_BY_ID: &str = "wallet/getassetissuebyid";
    /// TRX transfer
    pub const CREATE_TRANSACTION: &str = "wallet/createtransaction";
    /// TRC10 transfer
    pub const TRANSFER_ASSET: &str = "wallet/transferasset";
    /// Broadcast a signed transaction
    pub const BROADCAST_TRANSACTION: &str = "wallet/broadcasttransaction";
}

/// Transport trait for the wallet API (object-safe)
///
/// One call is one POST: implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `path` and return the JSON reply
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, SdkError>;
}

/// Helper to deserialize a reply, tagging failures with the endpoint path
pub fn deserialize_response<T: serde::de::DeserializeOwned>(
    path: &str,
    value: Value,
) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::transport(path, e.to_string()))
}

/// Map a `{"Error": "..."}` reply to `SdkError::Node`
fn check_node_error(path: &str, value: &Value) -> Result<(), SdkError> {
    if let Some(message) = value.get("Error").and_then(Value::as_str) {
        tracing::warn!(path, error = message, "node returned an error");
        return Err(SdkError::Node {
            path: path.to_string(),
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Mock transport for testing
///
/// Replies are looked up by path. Every request is recorded so tests can
/// inspect the exact body that would have been sent.
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockTransport {
    /// Create a new mock transport with no canned replies
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the reply for a path
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (another thread panicked while holding the lock).
    pub fn set_response(&self, path: &str, response: Value) {
        self.responses
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(path.to_string(), response);
    }

    /// Handle sharing this mock's recorded requests
    pub fn recorder(&self) -> RequestLog {
        RequestLog(Arc::clone(&self.requests))
    }

    /// Requests received so far, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.recorder().all()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared view of the requests a [`MockTransport`] has received
///
/// Stays valid after the transport itself moves into a client.
#[derive(Clone)]
pub struct RequestLog(Arc<Mutex<Vec<(String, Value)>>>);

impl RequestLog {
    /// All requests, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn all(&self) -> Vec<(String, Value)> {
        self.0.lock().expect("MockTransport mutex poisoned").clone()
    }

    /// Body of the most recent request to `path`
    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.all()
            .into_iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body)
    }

    /// Number of requests received
    pub fn len(&self) -> usize {
        self.all().len()
    }

    /// True when nothing was sent
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, SdkError> {
        self.requests
            .lock()
            .map_err(|_| SdkError::transport(path, "MockTransport mutex poisoned"))?
            .push((path.to_string(), body));

        let response = self
            .responses
            .lock()
            .map_err(|_| SdkError::transport(path, "MockTransport mutex poisoned"))?
            .get(path)
            .cloned();

        match response {
            Some(value) => {
                check_node_error(path, &value)?;
                Ok(value)
            }
            None => Err(SdkError::transport(path, "no mock response configured")),
        }
    }
}

/// HTTP transport for real node communication
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    config: crate::ClientConfig,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a transport from a validated config
    pub fn new(config: crate::ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;

        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &config.headers {
            let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SdkError::Config(format!("invalid header name {}: {}", name, e)))?;
            let value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|e| SdkError::Config(format!("invalid header value: {}", e)))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Config this transport was built from
    pub fn config(&self) -> &crate::ClientConfig {
        &self.config
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, SdkError> {
        let url = self.config.endpoint(path);
        let started = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SdkError::transport(path, e.to_string()))?;

        let status = response.status();
        tracing::debug!(
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "POST completed"
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SdkError::transport(path, format!("HTTP {}: {}", status, text)));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| SdkError::transport(path, e.to_string()))?;

        check_node_error(path, &value)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_custom_response() {
        let transport = MockTransport::new();
        transport.set_response(path::GET_NOW_BLOCK, json!({"blockID": "00"}));

        let result = transport
            .post_json(path::GET_NOW_BLOCK, Value::Null)
            .await
            .unwrap();
        assert_eq!(result["blockID"], "00");
    }

    #[tokio::test]
    async fn test_mock_transport_unknown_path() {
        let transport = MockTransport::new();
        let result = transport.post_json("wallet/unknown", Value::Null).await;
        match result {
            Err(SdkError::Transport { path, .. }) => assert_eq!(path, "wallet/unknown"),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_transport_node_error() {
        let transport = MockTransport::new();
        transport.set_response(path::GET_ACCOUNT, json!({"Error": "invalid address"}));

        let result = transport.post_json(path::GET_ACCOUNT, json!({})).await;
        match result {
            Err(SdkError::Node { path, message }) => {
                assert_eq!(path, "wallet/getaccount");
                assert_eq!(message, "invalid address");
            }
            other => panic!("Expected Node error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new();
        transport.set_response(path::GET_BLOCK_BY_NUM, json!({}));
        let log = transport.recorder();

        transport
            .post_json(path::GET_BLOCK_BY_NUM, json!({"num": 7}))
            .await
            .unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.last_body(path::GET_BLOCK_BY_NUM), Some(json!({"num": 7})));
        assert_eq!(transport.requests()[0].0, path::GET_BLOCK_BY_NUM);
    }

    #[test]
    fn test_deserialize_response_tags_path() {
        let result: Result<u64, _> = deserialize_response("wallet/x", json!("nope"));
        match result {
            Err(SdkError::Transport { path, .. }) => assert_eq!(path, "wallet/x"),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_transport_rejects_bad_config() {
        let config = crate::ClientConfig::new("not-a-url");
        assert!(matches!(HttpTransport::new(config), Err(SdkError::Config(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_transport_rejects_bad_header() {
        let config =
            crate::ClientConfig::new("http://localhost:8090").with_header("bad header", "v");
        assert!(matches!(HttpTransport::new(config), Err(SdkError::Config(_))));
    }
}
