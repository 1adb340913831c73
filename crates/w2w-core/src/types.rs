//! Caller-facing option types for the façade operations.
//!
//! Field names serialize in camelCase (`mixIn`, `unlockHeight`, ...), the
//! vocabulary validation messages refer to. Omitted options are left out of
//! the serialized object so defaults can be applied downstream.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Transfers
// ==============================================================================

/// One outgoing payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Destination address: 98 characters starting with `W2W`.
    pub address: String,
    /// Amount in raw (smallest) units.
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Transfer {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// ==============================================================================
// Wallet Service
// ==============================================================================

/// Paging for `get_messages`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_tx_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_limit: Option<u64>,
}

/// Options for the wallet service `transfer` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    pub transfers: Vec<Transfer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Mixing degree; defaults to 2, must lie in `[2, 10]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_height: Option<u64>,
    /// Defaults to 10 plus 10 per message character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
}

// ==============================================================================
// Wallet Daemon
// ==============================================================================

/// Options for `sendTransaction` and `createDelayedTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    pub transfers: Vec<Transfer>,
    /// Addresses to spend from; all wallet addresses when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
}

/// Block range and filters for `getTransactionHashes` / `getTransactions`.
///
/// At least one of `first_block_index` and `block_hash` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub block_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_block_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
}

impl TransactionQuery {
    pub fn from_index(first_block_index: u64, block_count: u64) -> Self {
        Self {
            block_count,
            first_block_index: Some(first_block_index),
            ..Self::default()
        }
    }

    pub fn from_hash(block_hash: impl Into<String>, block_count: u64) -> Self {
        Self {
            block_count,
            block_hash: Some(block_hash.into()),
            ..Self::default()
        }
    }
}

// ==============================================================================
// Blockchain Daemon
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplateRequest {
    /// Address that receives the block reward.
    pub address: String,
    /// Bytes reserved in the coinbase extra, at most 255.
    pub reserve_size: u64,
}
