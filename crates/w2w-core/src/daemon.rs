//! Blockchain daemon operations: JSON-RPC methods on `/json_rpc` plus the
//! plain JSON endpoints (`/getinfo`, `/getheight`, ...).

use serde_json::{json, Value};

use crate::client::W2wClient;
use crate::dialect::Dialect;
use crate::error::CoreError;
use crate::params::Params;
use crate::rpc::Transport;
use crate::types::BlockTemplateRequest;
use crate::validate::{self, ADDRESS, HEX, HEX64, NON_NEGATIVE, TX_HASHES};

/// Largest coinbase reserve a block template may ask for.
pub const MAX_RESERVE_SIZE: u64 = 255;

impl<T: Transport> W2wClient<T> {
    // ==========================================================================
    // JSON-RPC
    // ==========================================================================

    pub async fn count(&self) -> Result<Value, CoreError> {
        self.daemon_rpc("getblockcount", json!({})).await
    }

    /// Hash of the block at `height`. The daemon takes positional params.
    pub async fn block_hash_by_height(&self, height: u64) -> Result<Value, CoreError> {
        height_params(height)?;
        self.daemon_rpc("on_getblockhash", json!([height])).await
    }

    pub async fn block_header_by_hash(&self, hash: &str) -> Result<Value, CoreError> {
        let params = hash_params(hash)?;
        self.daemon_rpc("getblockheaderbyhash", params).await
    }

    pub async fn block_header_by_height(&self, height: u64) -> Result<Value, CoreError> {
        let params = height_params(height)?;
        self.daemon_rpc("getblockheaderbyheight", params).await
    }

    pub async fn last_block_header(&self) -> Result<Value, CoreError> {
        self.daemon_rpc("getlastblockheader", json!({})).await
    }

    /// Full block (explorer view) by hash.
    pub async fn block(&self, hash: &str) -> Result<Value, CoreError> {
        let params = hash_params(hash)?;
        self.daemon_rpc("f_block_json", params).await
    }

    /// Short block list ending at `height`.
    pub async fn blocks(&self, height: u64) -> Result<Value, CoreError> {
        let params = height_params(height)?;
        self.daemon_rpc("f_blocks_list_json", params).await
    }

    pub async fn transaction(&self, hash: &str) -> Result<Value, CoreError> {
        let params = hash_params(hash)?;
        self.daemon_rpc("f_transaction_json", params).await
    }

    pub async fn transaction_pool(&self) -> Result<Value, CoreError> {
        self.daemon_rpc("f_on_transactions_pool_json", json!({}))
            .await
    }

    pub async fn currency_id(&self) -> Result<Value, CoreError> {
        self.daemon_rpc("getcurrencyid", json!({})).await
    }

    /// Block template paying the reward to `request.address`.
    pub async fn block_template(&self, request: &BlockTemplateRequest) -> Result<Value, CoreError> {
        let params = Params::from_options(request)?;
        params.require("address", validate::address, ADDRESS)?;
        let reserve_ok = params.get("reserveSize").is_some_and(|v| {
            validate::non_negative_integer(v) && v.as_u64().is_some_and(|n| n <= MAX_RESERVE_SIZE)
        });
        if !reserve_ok {
            return Err(CoreError::Validation(format!(
                "0 <= reserveSize <= {MAX_RESERVE_SIZE}"
            )));
        }
        self.daemon_rpc("getblocktemplate", params.remap(Dialect::Daemon).into_value())
            .await
    }

    /// Submit a mined block blob. The daemon takes positional params.
    pub async fn submit_block(&self, block: &str) -> Result<Value, CoreError> {
        let params = Params::new().with("block", block);
        params.require("block", validate::hex_string, HEX)?;
        self.daemon_rpc("submitblock", json!([block])).await
    }

    // ==========================================================================
    // Plain JSON
    // ==========================================================================

    pub async fn info(&self) -> Result<Value, CoreError> {
        self.daemon_http("/getinfo", json!({})).await
    }

    /// Current chain height.
    pub async fn index(&self) -> Result<Value, CoreError> {
        self.daemon_http("/getheight", json!({})).await
    }

    pub async fn transactions(&self, txs: &[String]) -> Result<Value, CoreError> {
        let params = Params::new().with("txs", txs.to_vec());
        params.require("txs", |v| validate::array_of(v, validate::hex64), TX_HASHES)?;
        self.daemon_http("/gettransactions", params.remap(Dialect::Daemon).into_value())
            .await
    }

    pub async fn send_raw_transaction(&self, raw_tx: &str) -> Result<Value, CoreError> {
        let params = Params::new().with("rawTx", raw_tx);
        params.require("rawTx", validate::hex_string, HEX)?;
        self.daemon_http(
            "/sendrawtransaction",
            params.remap(Dialect::Daemon).into_value(),
        )
        .await
    }
}

fn hash_params(hash: &str) -> Result<Value, CoreError> {
    let params = Params::new().with("hash", hash);
    params.require("hash", validate::hex64, HEX64)?;
    Ok(params.into_value())
}

fn height_params(height: u64) -> Result<Value, CoreError> {
    let params = Params::new().with("height", height);
    params.require("height", validate::non_negative_integer, NON_NEGATIVE)?;
    Ok(params.into_value())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rpc::mock::MockTransport;
    use crate::test_util::{
        address_from_byte, assert_rpc_calls, hash_from_byte, mock_client, DAEMON_PORT,
    };

    #[tokio::test]
    async fn block_hash_by_height_uses_positional_params() {
        let client = mock_client(MockTransport::ok());
        client.block_hash_by_height(42).await.expect("resolves");
        let call = client.transport().only_call();
        assert_eq!(call.url.port(), Some(32348));
        assert_eq!(
            call.body,
            json!({ "jsonrpc": "2.0", "id": "0", "method": "on_getblockhash", "params": [42] })
        );
    }

    #[tokio::test]
    async fn block_header_by_hash_rejects_short_hash() {
        let client = mock_client(MockTransport::ok());
        let err = client
            .block_header_by_hash("abcd")
            .await
            .expect_err("must reject");
        assert_eq!(err.to_string(), "hash must be 64-digit hexadecimal string");
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn block_template_maps_daemon_field_names() {
        let client = mock_client(MockTransport::ok());
        let request = BlockTemplateRequest {
            address: address_from_byte('m'),
            reserve_size: 8,
        };
        client.block_template(&request).await.expect("resolves");
        assert_eq!(
            client.transport().only_call().body["params"],
            json!({ "wallet_address": address_from_byte('m'), "reserve_size": 8 })
        );
    }

    #[tokio::test]
    async fn block_template_bounds_reserve_size() {
        let client = mock_client(MockTransport::ok());
        let ok = BlockTemplateRequest {
            address: address_from_byte('m'),
            reserve_size: MAX_RESERVE_SIZE,
        };
        client.block_template(&ok).await.expect("255 is accepted");

        let too_big = BlockTemplateRequest {
            reserve_size: MAX_RESERVE_SIZE + 1,
            ..ok
        };
        let err = client
            .block_template(&too_big)
            .await
            .expect_err("256 must reject");
        assert_eq!(err.to_string(), "0 <= reserveSize <= 255");
        assert_eq!(client.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn block_template_checks_address_first() {
        let client = mock_client(MockTransport::ok());
        let request = BlockTemplateRequest {
            address: "nope".to_owned(),
            reserve_size: 1000,
        };
        let err = client.block_template(&request).await.expect_err("must reject");
        assert!(err.to_string().starts_with("address"));
    }

    #[tokio::test]
    async fn submit_block_sends_blob_positionally() {
        let client = mock_client(MockTransport::ok());
        client.submit_block("0100ff").await.expect("resolves");
        assert_eq!(client.transport().only_call().body["params"], json!(["0100ff"]));
    }

    #[tokio::test]
    async fn plain_endpoints_send_bare_bodies() {
        let client = mock_client(MockTransport::replying(json!({ "status": "OK" })));
        let hashes = vec![hash_from_byte(1), hash_from_byte(2)];
        client.transactions(&hashes).await.expect("resolves");
        client.send_raw_transaction("00aa").await.expect("resolves");

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].url.path(), "/gettransactions");
        assert_eq!(calls[0].body, json!({ "txs_hashes": hashes }));
        assert_eq!(calls[1].url.path(), "/sendrawtransaction");
        assert_eq!(calls[1].body, json!({ "tx_as_hex": "00aa" }));
    }

    #[tokio::test]
    async fn transactions_rejects_non_hash_entries() {
        let client = mock_client(MockTransport::ok());
        let err = client
            .transactions(&[hash_from_byte(1), "zz".to_owned()])
            .await
            .expect_err("must reject");
        assert!(err.to_string().starts_with("txs must be an array of transactions"));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn info_returns_flat_object() {
        let client = mock_client(MockTransport::replying(json!({
            "height": 1200,
            "status": "OK",
        })));
        let info = client.info().await.expect("resolves");
        assert_eq!(info["height"], 1200);
    }

    #[tokio::test]
    async fn simple_calls_use_daemon_method_names() {
        let client = mock_client(MockTransport::ok());
        let hash = hash_from_byte(4);

        client.count().await.expect("count");
        client.block_header_by_hash(&hash).await.expect("header by hash");
        client.block_header_by_height(7).await.expect("header by height");
        client.last_block_header().await.expect("last header");
        client.block(&hash).await.expect("block");
        client.blocks(7).await.expect("blocks");
        client.transaction(&hash).await.expect("transaction");
        client.transaction_pool().await.expect("pool");
        client.currency_id().await.expect("currency id");

        assert_rpc_calls(
            &client.transport().calls(),
            &[
                (DAEMON_PORT, "getblockcount", json!({})),
                (DAEMON_PORT, "getblockheaderbyhash", json!({ "hash": hash })),
                (DAEMON_PORT, "getblockheaderbyheight", json!({ "height": 7 })),
                (DAEMON_PORT, "getlastblockheader", json!({})),
                (DAEMON_PORT, "f_block_json", json!({ "hash": hash })),
                (DAEMON_PORT, "f_blocks_list_json", json!({ "height": 7 })),
                (DAEMON_PORT, "f_transaction_json", json!({ "hash": hash })),
                (DAEMON_PORT, "f_on_transactions_pool_json", json!({})),
                (DAEMON_PORT, "getcurrencyid", json!({})),
            ],
        );
    }

    #[tokio::test]
    async fn info_and_index_post_to_plain_endpoints() {
        let client = mock_client(MockTransport::replying(json!({ "status": "OK" })));
        client.info().await.expect("info");
        client.index().await.expect("index");

        let calls = client.transport().calls();
        let routes: Vec<(Option<u16>, &str)> = calls
            .iter()
            .map(|call| (call.url.port(), call.url.path()))
            .collect();
        assert_eq!(
            routes,
            vec![(Some(DAEMON_PORT), "/getinfo"), (Some(DAEMON_PORT), "/getheight")]
        );
        assert!(calls.iter().all(|call| call.body == json!({})));
    }
}
