use serde_json::Value;

use crate::error::{CoreError, RpcError};

/// Every request carries the same id; calls are never batched, so replies
/// need no correlation.
const REQUEST_ID: &str = "0";

#[derive(serde::Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub(crate) jsonrpc: &'static str,
    pub(crate) id: &'static str,
    pub(crate) method: &'a str,
    pub(crate) params: &'a Value,
}

/// Serialize a JSON-RPC 2.0 envelope. `params` may be an object or an
/// array, depending on what the daemon method expects.
pub(crate) fn build_rpc(method: &str, params: &Value) -> Result<Vec<u8>, CoreError> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0",
        id: REQUEST_ID,
        method,
        params,
    };
    Ok(serde_json::to_vec(&request).map_err(RpcError::Encode)?)
}

/// Serialize a bare parameter object for the plain JSON endpoints.
pub(crate) fn build_plain(params: &Value) -> Result<Vec<u8>, CoreError> {
    Ok(serde_json::to_vec(params).map_err(RpcError::Encode)?)
}

/// Turn a response body into the value handed back to the caller.
///
/// - a body that is not JSON fails with the parser's message;
/// - a non-null `error` member fails with its `message`;
/// - a `result` member is unwrapped;
/// - anything else (plain endpoints) is returned as parsed.
pub(crate) fn normalize_response(body: &[u8]) -> Result<Value, CoreError> {
    let decoded: Value = serde_json::from_slice(body)
        .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;

    let Value::Object(mut obj) = decoded else {
        return Ok(decoded);
    };

    if let Some(err) = obj.remove("error").filter(|e| !e.is_null()) {
        return Err(parse_jsonrpc_error(err));
    }

    match obj.remove("result") {
        Some(result) => Ok(result),
        None => Ok(Value::Object(obj)),
    }
}

/// Parse a JSON-RPC error value into a structured `CoreError`.
///
/// Daemons answer `{"code": <int>, "message": <string>}`; the code is kept
/// when present. Error values without a string `message` surface their raw
/// JSON text instead.
fn parse_jsonrpc_error(err: Value) -> CoreError {
    let code = err.get("code").and_then(Value::as_i64);
    let message = match err.get("message").and_then(Value::as_str) {
        Some(message) => message.to_owned(),
        None => match err {
            Value::String(s) => s,
            other => other.to_string(),
        },
    };
    CoreError::Rpc(RpcError::ServerError { code, message })
}
