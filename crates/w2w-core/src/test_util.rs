//! Shared test helpers for `w2w-core` unit tests.
//!
//! Builders for well-formed addresses and hashes plus a client wired to the
//! recording [`MockTransport`], so façade tests share one source of dummy
//! data.

use serde_json::{json, Value};

use crate::client::W2wClient;
use crate::rpc::mock::{MockTransport, RecordedCall};
use crate::rpc::{ConnectionConfig, JSON_RPC_PATH};
use crate::validate::{ADDRESS_LEN, ADDRESS_PREFIX};

pub const WALLET_PORT: u16 = 8070;
pub const DAEMON_PORT: u16 = 32348;

/// A valid address whose body is `c` repeated. Distinct chars give distinct
/// addresses.
pub fn address_from_byte(c: char) -> String {
    let body: String = std::iter::repeat(c)
        .take(ADDRESS_LEN - ADDRESS_PREFIX.len())
        .collect();
    format!("{ADDRESS_PREFIX}{body}")
}

/// A 64-digit hex string starting with `b`, zero-padded.
pub fn hash_from_byte(b: u8) -> String {
    format!("{b:02x}{}", "0".repeat(62))
}

pub fn mock_client(transport: MockTransport) -> W2wClient<MockTransport> {
    let config = ConnectionConfig::new("http://127.0.0.1", WALLET_PORT, DAEMON_PORT, None)
        .expect("static test config is valid");
    W2wClient::with_transport(config, transport)
}

/// Check recorded JSON-RPC calls against `(port, method, params)` rows, in
/// order.
pub fn assert_rpc_calls(calls: &[RecordedCall], expected: &[(u16, &str, Value)]) {
    assert_eq!(calls.len(), expected.len(), "call count, got {calls:?}");
    for (call, (port, method, params)) in calls.iter().zip(expected) {
        assert_eq!(call.url.port(), Some(*port), "port of `{method}`");
        assert_eq!(call.url.path(), JSON_RPC_PATH, "path of `{method}`");
        assert_eq!(
            call.body,
            json!({ "jsonrpc": "2.0", "id": "0", "method": method, "params": params }),
        );
    }
}
