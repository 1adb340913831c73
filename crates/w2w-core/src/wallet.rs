//! Wallet service JSON-RPC operations (single wallet, snake_case dialect).

use serde_json::{json, Value};

use crate::client::W2wClient;
use crate::dialect::Dialect;
use crate::error::CoreError;
use crate::params::{FeePolicy, Params};
use crate::rpc::Transport;
use crate::types::{MessagesQuery, SendOptions};
use crate::validate::{self, HEX64, NON_NEGATIVE, TRANSFERS};

impl<T: Transport> W2wClient<T> {
    pub async fn outputs(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("get_outputs", json!({})).await
    }

    pub async fn height(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("get_height", json!({})).await
    }

    pub async fn balance(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("getbalance", json!({})).await
    }

    /// List wallet messages, optionally paged by transaction id.
    pub async fn messages(&self, query: &MessagesQuery) -> Result<Value, CoreError> {
        let params = Params::from_options(query)?;
        params
            .optional("firstTxId", validate::non_negative_integer, NON_NEGATIVE)?
            .optional("txLimit", validate::non_negative_integer, NON_NEGATIVE)?;
        self.wallet_rpc("get_messages", params.remap(Dialect::Wallet).into_value())
            .await
    }

    /// Incoming payments carrying `payment_id`.
    pub async fn payments(&self, payment_id: &str) -> Result<Value, CoreError> {
        let params = Params::new().with("paymentId", payment_id);
        params.require("paymentId", validate::hex64, HEX64)?;
        self.wallet_rpc("get_payments", params.remap(Dialect::Wallet).into_value())
            .await
    }

    pub async fn transfers(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("get_transfers", json!({})).await
    }

    pub async fn store(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("store", json!({})).await
    }

    pub async fn reset(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("reset", json!({})).await
    }

    pub async fn optimize(&self) -> Result<Value, CoreError> {
        self.wallet_rpc("optimize", json!({})).await
    }

    /// Send `transfers` through the wallet service `transfer` call.
    ///
    /// `mix_in` defaults to 2 and must lie in `[2, 10]`, `unlock_height`
    /// defaults to 0, and `fee` defaults to 10 plus 10 for every character
    /// of every transfer message.
    pub async fn send(&self, options: &SendOptions) -> Result<Value, CoreError> {
        let mut params = Params::from_options(options)?;
        params
            .require(
                "transfers",
                |v| validate::array_of(v, validate::transfer),
                TRANSFERS,
            )?
            .optional("paymentId", validate::hex64, HEX64)?;
        params
            .mix_in()?
            .unlock_height()?
            .fee(FeePolicy::PerMessageCharacter)?;
        self.wallet_rpc("transfer", params.remap(Dialect::Wallet).into_value())
            .await
    }
}
