pub mod client;
pub mod daemon;
pub mod dialect;
pub mod error;
pub mod params;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;
pub mod validate;
pub mod wallet;
pub mod walletd;

pub use client::W2wClient;
pub use error::{CoreError, RpcError};
pub use types::{
    BlockTemplateRequest, MessagesQuery, SendOptions, TransactionOptions, TransactionQuery,
    Transfer,
};
