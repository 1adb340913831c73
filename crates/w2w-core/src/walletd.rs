//! Wallet daemon JSON-RPC operations (multi-address, camelCase dialect).

use serde_json::{json, Value};

use crate::client::W2wClient;
use crate::dialect::Dialect;
use crate::error::CoreError;
use crate::params::{FeePolicy, Params};
use crate::rpc::Transport;
use crate::types::{TransactionOptions, TransactionQuery};
use crate::validate::{self, ADDRESS, ADDRESSES, HEX, HEX64, NON_NEGATIVE, STRING, TRANSFERS};

const ANCHOR_REQUIRED: &str = "either firstBlockIndex or blockHash is required";

impl<T: Transport> W2wClient<T> {
    /// Reset the wallet, or replace it with the one derived from
    /// `view_secret_key`.
    pub async fn reset_or_replace(&self, view_secret_key: Option<&str>) -> Result<Value, CoreError> {
        let mut params = Params::new();
        if let Some(key) = view_secret_key {
            params = params.with("viewSecretKey", key);
        }
        params.optional("viewSecretKey", validate::hex64, HEX64)?;
        self.wallet_rpc("reset", params.into_value()).await
    }

    pub async fn status(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("getStatus", json!({})).await
    }

    pub async fn get_balance(&self, address: &str) -> Result<Value, CoreError> {
        let params = address_params(address)?;
        self.wallet_rpc("getBalance", params).await
    }

    pub async fn create_address(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("createAddress", json!({})).await
    }

    /// Remove `address` from the wallet. An invalid address is rejected
    /// without sending anything.
    pub async fn delete_address(&self, address: &str) -> Result<Value, CoreError> {
        let params = address_params(address)?;
        self.wallet_rpc("deleteAddress", params).await
    }

    pub async fn get_addresses(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("getAddresses", json!({})).await
    }

    pub async fn get_view_secret_key(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("getViewKey", json!({})).await
    }

    pub async fn get_spend_keys(&self, address: &str) -> Result<Value, CoreError> {
        let params = address_params(address)?;
        self.wallet_rpc("getSpendKeys", params).await
    }

    pub async fn get_block_hashes(
        &self,
        first_block_index: u64,
        block_count: u64,
    ) -> Result<Value, CoreError> {
        let params = Params::new()
            .with("firstBlockIndex", first_block_index)
            .with("blockCount", block_count);
        params
            .require("firstBlockIndex", validate::non_negative_integer, NON_NEGATIVE)?
            .require("blockCount", validate::non_negative_integer, NON_NEGATIVE)?;
        self.wallet_rpc("getBlockHashes", params.into_value()).await
    }

    pub async fn get_transaction(&self, hash: &str) -> Result<Value, CoreError> {
        let params = transaction_hash_params(hash)?;
        self.wallet_rpc("getTransaction", params).await
    }

    pub async fn get_unconfirmed_transaction_hashes(
        &self,
        addresses: Option<&[String]>,
    ) -> Result<Value, CoreError> {
        let mut params = Params::new();
        if let Some(addresses) = addresses {
            params = params.with("addresses", addresses.to_vec());
        }
        params.optional(
            "addresses",
            |v| validate::array_of(v, validate::address),
            ADDRESSES,
        )?;
        self.wallet_rpc("getUnconfirmedTransactionHashes", params.into_value())
            .await
    }

    pub async fn get_transaction_hashes(&self, query: &TransactionQuery) -> Result<Value, CoreError> {
        let params = transaction_query_params(query)?;
        self.wallet_rpc("getTransactionHashes", params).await
    }

    pub async fn get_transactions(&self, query: &TransactionQuery) -> Result<Value, CoreError> {
        let params = transaction_query_params(query)?;
        self.wallet_rpc("getTransactions", params).await
    }

    /// Build and relay a transaction.
    ///
    /// `mix_in` defaults to 2 (sent as `anonymity`), `unlock_height` to 0
    /// (sent as `unlockTime`), `addresses` go out as `sourceAddresses`, and
    /// `fee` defaults to 10 plus 10 per message character.
    pub async fn send_transaction(&self, options: &TransactionOptions) -> Result<Value, CoreError> {
        let params = transaction_params(options, FeePolicy::PerMessageCharacter)?;
        self.wallet_rpc("sendTransaction", params).await
    }

    /// Build a transaction without relaying it.
    ///
    /// Same as [`Self::send_transaction`] except that the default fee is 10
    /// per transfer regardless of messages.
    pub async fn create_delayed_transaction(
        &self,
        options: &TransactionOptions,
    ) -> Result<Value, CoreError> {
        let params = transaction_params(options, FeePolicy::PerTransfer)?;
        self.wallet_rpc("createDelayedTransaction", params).await
    }

    pub async fn get_delayed_transaction_hashes(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("getDelayedTransactionHashes", json!({}))
            .await
    }

    pub async fn delete_delayed_transaction(&self, hash: &str) -> Result<Value, CoreError> {
        let params = transaction_hash_params(hash)?;
        self.wallet_rpc("deleteDelayedTransaction", params).await
    }

    pub async fn send_delayed_transaction(&self, hash: &str) -> Result<Value, CoreError> {
        let params = transaction_hash_params(hash)?;
        self.wallet_rpc("sendDelayedTransaction", params).await
    }

    /// Decode the messages embedded in a hex-encoded transaction extra.
    pub async fn get_messages_from_extra(&self, extra: &str) -> Result<Value, CoreError> {
        let params = Params::new().with("extra", extra);
        params.require("extra", validate::hex_string, HEX)?;
        self.wallet_rpc("getMessagesFromExtra", params.into_value())
            .await
    }
}

fn address_params(address: &str) -> Result<Value, CoreError> {
    let params = Params::new().with("address", address);
    params.require("address", validate::address, ADDRESS)?;
    Ok(params.into_value())
}

fn transaction_hash_params(hash: &str) -> Result<Value, CoreError> {
    let params = Params::new().with("hash", hash);
    params.require("hash", validate::hex64, HEX64)?;
    Ok(json!({ "transactionHash": hash }))
}

fn transaction_query_params(query: &TransactionQuery) -> Result<Value, CoreError> {
    let params = Params::from_options(query)?;
    params
        .require("blockCount", validate::non_negative_integer, NON_NEGATIVE)?
        .require_any(&["firstBlockIndex", "blockHash"], ANCHOR_REQUIRED)?
        .optional("firstBlockIndex", validate::non_negative_integer, NON_NEGATIVE)?
        .optional("blockHash", validate::hex64, HEX64)?
        .optional("paymentId", validate::hex64, HEX64)?
        .optional(
            "addresses",
            |v| validate::array_of(v, validate::address),
            ADDRESSES,
        )?;
    Ok(params.into_value())
}

fn transaction_params(options: &TransactionOptions, fee: FeePolicy) -> Result<Value, CoreError> {
    let mut params = Params::from_options(options)?;
    params
        .require(
            "transfers",
            |v| validate::array_of(v, validate::transfer),
            TRANSFERS,
        )?
        .optional(
            "addresses",
            |v| validate::array_of(v, validate::address),
            ADDRESSES,
        )?
        .optional("changeAddress", validate::address, ADDRESS)?
        .optional("paymentId", validate::hex64, HEX64)?
        .optional("extra", validate::string, STRING)?;
    params.mix_in()?.unlock_height()?.fee(fee)?;
    Ok(params.remap(Dialect::WalletdTransaction).into_value())
}
