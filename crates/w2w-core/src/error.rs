#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The client could not be constructed from the supplied settings.
    #[error("{0}")]
    Config(String),

    /// A caller-supplied argument failed a shape or range check. No request
    /// was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Failures that happen once a request has been handed to the transport.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("RPC server error")]
    Transport(#[source] reqwest::Error),

    #[error("RPC timeout")]
    Timeout,

    /// The daemon answered with an explicit `error` object. The message is
    /// surfaced unchanged.
    #[error("{message}")]
    ServerError { code: Option<i64>, message: String },

    /// The response body was not valid JSON.
    #[error("{0}")]
    InvalidResponse(String),

    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
