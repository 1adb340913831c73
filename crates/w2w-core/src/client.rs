use serde_json::Value;
use tracing::debug;

use crate::error::CoreError;
use crate::rpc::protocol::{build_plain, build_rpc, normalize_response};
use crate::rpc::{ConnectionConfig, HttpTransport, Service, Transport, JSON_RPC_PATH};

/// Client for the W2W wallet service, wallet daemon, and blockchain daemon.
///
/// Holds only the immutable connection settings and the transport, so one
/// instance can be shared across tasks and used for overlapping calls.
/// Every operation validates its arguments first and returns a validation
/// error without touching the network when they are invalid.
///
/// Operations are grouped by backend:
/// - wallet service JSON-RPC (`balance`, `send`, ...), see `wallet.rs`;
/// - wallet daemon JSON-RPC (`get_addresses`, `send_transaction`, ...), see
///   `walletd.rs`;
/// - blockchain daemon JSON-RPC and plain JSON (`count`, `info`, ...), see
///   `daemon.rs`.
pub struct W2wClient<T = HttpTransport> {
    config: ConnectionConfig,
    transport: T,
}

impl W2wClient<HttpTransport> {
    /// Create a client for `uri` (`http://host` or `https://host`).
    ///
    /// `timeout_ms` defaults to 5000. Fails before any network activity if
    /// the URI is empty or its scheme is not http/https.
    pub fn new(
        uri: &str,
        wallet_port: u16,
        daemon_port: u16,
        timeout_ms: Option<u64>,
    ) -> Result<Self, CoreError> {
        let config = ConnectionConfig::new(uri, wallet_port, daemon_port, timeout_ms)?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> W2wClient<T> {
    pub fn with_transport(config: ConnectionConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub(crate) async fn wallet_rpc(&self, method: &str, params: Value) -> Result<Value, CoreError> {
        self.json_rpc(Service::Wallet, method, params).await
    }

    pub(crate) async fn daemon_rpc(&self, method: &str, params: Value) -> Result<Value, CoreError> {
        self.json_rpc(Service::Daemon, method, params).await
    }

    /// POST a bare JSON body to one of the daemon's plain endpoints.
    pub(crate) async fn daemon_http(&self, path: &str, params: Value) -> Result<Value, CoreError> {
        let payload = build_plain(&params)?;
        debug!(
            rpc.service = %Service::Daemon,
            rpc.path = path,
            payload_len = payload.len(),
            "http call"
        );
        self.dispatch(Service::Daemon, path, payload).await
    }

    async fn json_rpc(
        &self,
        service: Service,
        method: &str,
        params: Value,
    ) -> Result<Value, CoreError> {
        let payload = build_rpc(method, &params)?;
        debug!(
            rpc.service = %service,
            rpc.method = method,
            payload_len = payload.len(),
            "rpc call"
        );
        self.dispatch(service, JSON_RPC_PATH, payload).await
    }

    async fn dispatch(
        &self,
        service: Service,
        path: &str,
        payload: Vec<u8>,
    ) -> Result<Value, CoreError> {
        let url = self.config.endpoint(service, path)?;
        let body = self.transport.post(&url, payload).await?;
        normalize_response(&body)
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rpc::mock::MockTransport;
    use crate::test_util::mock_client;

    #[test]
    fn new_rejects_unknown_scheme_before_any_request() {
        let err = match W2wClient::new("ws://127.0.0.1", 8070, 32348, None) {
            Ok(_) => panic!("ws scheme must be rejected"),
            Err(err) => err,
        };
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(err.to_string(), "host must begin with http(s)://");
    }

    #[tokio::test]
    async fn wallet_and_daemon_calls_use_their_own_ports() {
        let client = mock_client(MockTransport::ok());
        client.wallet_rpc("getbalance", json!({})).await.expect("ok");
        client.daemon_rpc("getblockcount", json!({})).await.expect("ok");
        client.daemon_http("/getinfo", json!({})).await.expect("ok");

        let urls: Vec<String> = client
            .transport()
            .calls()
            .into_iter()
            .map(|call| call.url.to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                "http://127.0.0.1:8070/json_rpc",
                "http://127.0.0.1:32348/json_rpc",
                "http://127.0.0.1:32348/getinfo",
            ]
        );
    }

    #[tokio::test]
    async fn plain_calls_send_the_bare_object() {
        let client = mock_client(MockTransport::replying(json!({ "height": 5 })));
        let value = client
            .daemon_http("/getheight", json!({}))
            .await
            .expect("plain call resolves");
        assert_eq!(value, json!({ "height": 5 }));
        assert_eq!(client.transport().only_call().body, json!({}));
    }

    #[tokio::test]
    async fn protocol_errors_are_surfaced_to_the_caller() {
        let client = mock_client(MockTransport::replying(json!({
            "jsonrpc": "2.0",
            "id": "0",
            "error": { "code": -7, "message": "Wrong address" },
        })));
        let err = client
            .wallet_rpc("getBalance", json!({}))
            .await
            .expect_err("error reply must reject");
        assert_eq!(err.to_string(), "Wrong address");
    }
}
