use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::Transport;

/// Plain HTTP(S) transport over `reqwest`.
///
/// The configured timeout bounds the whole exchange (connect, send, and
/// reading the body). When it fires the request future is dropped, which
/// aborts the connection, so no late response can be observed.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::Config(format!("build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    async fn exchange(&self, url: &Url, payload: Vec<u8>) -> Result<Vec<u8>, RpcError> {
        // `body(Vec<u8>)` gives the request a known length, so reqwest
        // emits a matching Content-Length header.
        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        debug!(%url, %status, body_len = body.len(), "rpc response");
        trace!(%url, body = %String::from_utf8_lossy(&body), "rpc response body");

        Ok(body.to_vec())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &Url, payload: Vec<u8>) -> Result<Vec<u8>, CoreError> {
        match tokio::time::timeout(self.timeout, self.exchange(url, payload)).await {
            Ok(result) => Ok(result?),
            Err(_elapsed) => {
                debug!(%url, timeout_ms = self.timeout.as_millis() as u64, "rpc timed out");
                Err(RpcError::Timeout.into())
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RpcError {
    if err.is_timeout() {
        RpcError::Timeout
    } else {
        RpcError::Transport(err)
    }
}
