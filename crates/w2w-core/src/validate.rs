//! Argument predicates shared by every façade operation.
//!
//! Each predicate is total over an arbitrary [`serde_json::Value`]: it never
//! panics and answers `false` for values of the wrong JSON type. Operations
//! compose them through [`crate::params::Params`], which turns a failed
//! predicate into a [`crate::CoreError::Validation`] naming the field.

use serde_json::Value;

/// Three-character marker every W2W address starts with.
pub const ADDRESS_PREFIX: &str = "W2W";

/// Exact length of a W2W address, prefix included.
pub const ADDRESS_LEN: usize = 98;

/// Length of a hex-encoded hash, payment id or secret key.
pub const HEX64_LEN: usize = 64;

// ==============================================================================
// Expected-shape Messages
// ==============================================================================

// Appended to the field name when a predicate fails.
pub(crate) const NON_NEGATIVE: &str = " must be a non-negative integer";
pub(crate) const HEX: &str = " must be a hexadecimal string";
pub(crate) const HEX64: &str = " must be 64-digit hexadecimal string";
pub(crate) const ADDRESS: &str = " must be 98-character string beginning with W2W";
pub(crate) const RAW_AMOUNT: &str = " must be a raw amount of W2W (X)";
pub(crate) const STRING: &str = " must be a string";
pub(crate) const TRANSFERS: &str = " must be an array of transfers each of which must be a transfer object { address: 98-character string beginning with W2W, amount: raw amount of W2W (X), message: optional string }";
pub(crate) const ADDRESSES: &str =
    " must be an array of addresses each of which must be 98-character string beginning with W2W";
pub(crate) const TX_HASHES: &str =
    " must be an array of transactions each of which must be 64-digit hexadecimal string";

// ==============================================================================
// Scalar Predicates
// ==============================================================================

/// True iff `value` is an integral JSON number that is not negative.
///
/// Integral floats such as `5.0` are accepted; daemons and callers that go
/// through JavaScript-style number handling emit them.
pub fn non_negative_integer(value: &Value) -> bool {
    let Value::Number(n) = value else {
        return false;
    };
    if n.is_u64() {
        return true;
    }
    if n.is_i64() {
        return false;
    }
    n.as_f64()
        .is_some_and(|f| f.is_finite() && f >= 0.0 && f.fract() == 0.0)
}

/// True iff `value` is a string of exactly 64 hex digits, either case.
pub fn hex64(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == HEX64_LEN && is_hex(s))
}

/// True iff `value` is a string made only of hex digits. The empty string
/// qualifies.
pub fn hex_string(value: &Value) -> bool {
    value.as_str().is_some_and(is_hex)
}

/// True iff `value` is a 98-character string starting with [`ADDRESS_PREFIX`].
pub fn address(value: &Value) -> bool {
    value.as_str().is_some_and(is_address)
}

pub fn string(value: &Value) -> bool {
    value.is_string()
}

// ==============================================================================
// Composite Predicates
// ==============================================================================

/// True iff `value` is an object with a valid `address`, a non-negative
/// integer `amount`, and, when present, a string `message`.
pub fn transfer(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let address_ok = obj.get("address").is_some_and(address);
    let amount_ok = obj.get("amount").is_some_and(non_negative_integer);
    let message_ok = obj.get("message").map_or(true, string);
    address_ok && amount_ok && message_ok
}

/// True iff `value` is an array whose every element satisfies `element`.
/// Stops at the first failing element.
pub fn array_of(value: &Value, element: impl Fn(&Value) -> bool) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(element))
}

// ==============================================================================
// String Helpers
// ==============================================================================

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_address(s: &str) -> bool {
    // Byte length equals char length only for ASCII; count chars so a
    // multi-byte string of 98 characters is judged like any other.
    s.starts_with(ADDRESS_PREFIX) && s.chars().count() == ADDRESS_LEN
}
