//! Transport layer shared by the wallet and daemon façades.
//!
//! Defines the [`Transport`] trait, the HTTP implementation
//! ([`HttpTransport`]), connection settings, and the JSON-RPC request
//! builder / response normalizer. A recording mock (`mock::MockTransport`)
//! backs the unit tests.

mod connection;
mod http;
#[cfg(test)]
pub mod mock;
pub(crate) mod protocol;

pub use connection::{ConnectionConfig, Scheme, Service, DEFAULT_TIMEOUT_MS, JSON_RPC_PATH};
pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::CoreError;

/// Sends one serialized request and collects the full response body.
///
/// Implementations issue exactly one POST per call, never retry, and map
/// every failure to a single `Err`. A timeout must abort the in-flight
/// request before returning.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &Url, payload: Vec<u8>) -> Result<Vec<u8>, CoreError>;
}
