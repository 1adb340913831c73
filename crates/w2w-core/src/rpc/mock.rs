use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::error::CoreError;

use super::Transport;

/// One request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: Url,
    pub body: Value,
}

/// A transport for testing. Records every request and answers each one
/// with the same canned body.
pub struct MockTransport {
    reply: Vec<u8>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Answer every call with `{"jsonrpc":"2.0","id":"0","result":{"status":"OK"}}`.
    pub fn ok() -> Self {
        Self::replying(serde_json::json!({
            "jsonrpc": "2.0",
            "id": "0",
            "result": { "status": "OK" },
        }))
    }

    pub fn replying(body: Value) -> Self {
        Self {
            reply: body.to_string().into_bytes(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    /// The single request issued so far. Panics unless exactly one was made.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request, got {calls:?}");
        calls.into_iter().next().expect("length checked above")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, url: &Url, payload: Vec<u8>) -> Result<Vec<u8>, CoreError> {
        let body = serde_json::from_slice(&payload).expect("requests are always JSON");
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedCall {
                url: url.clone(),
                body,
            });
        Ok(self.reply.clone())
    }
}
