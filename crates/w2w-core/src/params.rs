//! Parameter pipeline used by every façade operation.
//!
//! Options are serialized into a JSON object, checked field by field in the
//! order the caller of [`Params`] asks for, defaulted, remapped to the wire
//! names of a [`Dialect`], and finally handed to the request builder. The
//! first failing check short-circuits with a validation error, so no request
//! is built for invalid input.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dialect::Dialect;
use crate::error::CoreError;
use crate::validate::{self, NON_NEGATIVE, RAW_AMOUNT};

/// Lowest accepted mixing degree; also the default when omitted.
pub const MIN_MIX_IN: u64 = 2;
/// Highest accepted mixing degree.
pub const MAX_MIX_IN: u64 = 10;
pub const DEFAULT_UNLOCK_HEIGHT: u64 = 0;
/// Base fee in raw units.
pub const DEFAULT_FEE: u64 = 10;
/// Surcharge in raw units per message character.
pub const DEFAULT_CHARACTER_FEE: u64 = 10;

/// How a missing `fee` is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePolicy {
    /// Base fee plus a surcharge for every character of every message.
    PerMessageCharacter,
    /// Base fee once per transfer; messages are free.
    PerTransfer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize an options struct into a parameter object. Options that
    /// serialize to `null` (e.g. an absent `Option<T>`) yield an empty
    /// object.
    pub fn from_options<T: Serialize>(options: &T) -> Result<Self, CoreError> {
        match serde_json::to_value(options) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(Value::Null) => Ok(Self::new()),
            Ok(_) => Err(CoreError::validation("opts must be object")),
            Err(e) => Err(CoreError::validation(format!("opts must be object: {e}"))),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_owned(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Fail unless `field` is present and satisfies `check`.
    pub fn require(
        &self,
        field: &str,
        check: impl Fn(&Value) -> bool,
        expected: &str,
    ) -> Result<&Self, CoreError> {
        match self.0.get(field) {
            Some(value) if check(value) => Ok(self),
            _ => Err(CoreError::validation(format!("{field}{expected}"))),
        }
    }

    /// Fail if `field` is present but does not satisfy `check`.
    pub fn optional(
        &self,
        field: &str,
        check: impl Fn(&Value) -> bool,
        expected: &str,
    ) -> Result<&Self, CoreError> {
        match self.0.get(field) {
            Some(value) if !check(value) => {
                Err(CoreError::validation(format!("{field}{expected}")))
            }
            _ => Ok(self),
        }
    }

    /// Fail unless at least one of `fields` is present. Supplying several is
    /// accepted.
    pub fn require_any(&self, fields: &[&str], message: &str) -> Result<&Self, CoreError> {
        if fields.iter().any(|field| self.0.contains_key(*field)) {
            Ok(self)
        } else {
            Err(CoreError::validation(message))
        }
    }

    /// Default `mixIn` to [`MIN_MIX_IN`] and check it lies in the inclusive
    /// mixing range.
    pub fn mix_in(&mut self) -> Result<&mut Self, CoreError> {
        let value = self
            .0
            .entry("mixIn")
            .or_insert_with(|| Value::from(MIN_MIX_IN));
        let in_range = validate::non_negative_integer(value)
            && value
                .as_f64()
                .is_some_and(|n| n >= MIN_MIX_IN as f64 && n <= MAX_MIX_IN as f64);
        if in_range {
            Ok(self)
        } else {
            Err(CoreError::validation(format!(
                "{MIN_MIX_IN} <= mixIn <= {MAX_MIX_IN}"
            )))
        }
    }

    /// Default `unlockHeight` to [`DEFAULT_UNLOCK_HEIGHT`] and check it is a
    /// non-negative integer.
    pub fn unlock_height(&mut self) -> Result<&mut Self, CoreError> {
        self.0
            .entry("unlockHeight")
            .or_insert_with(|| Value::from(DEFAULT_UNLOCK_HEIGHT));
        self.require("unlockHeight", validate::non_negative_integer, NON_NEGATIVE)?;
        Ok(self)
    }

    /// Fill in `fee` from `transfers` according to `policy` when omitted,
    /// then check it is a non-negative integer.
    ///
    /// Must run after `transfers` has been validated.
    pub fn fee(&mut self, policy: FeePolicy) -> Result<&mut Self, CoreError> {
        if !self.0.contains_key("fee") {
            let transfers = self
                .0
                .get("transfers")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let fee = default_fee(transfers, policy);
            self.0.insert("fee".to_owned(), Value::from(fee));
        }
        self.require("fee", validate::non_negative_integer, RAW_AMOUNT)?;
        Ok(self)
    }

    /// Rename fields to the wire names of `dialect`. Each renamed field is
    /// removed under its original name; unmapped fields pass through.
    pub fn remap(self, dialect: Dialect) -> Self {
        let mut out = Map::with_capacity(self.0.len());
        for (field, value) in self.0 {
            let wire = dialect.wire_name(&field).unwrap_or(field.as_str()).to_owned();
            out.insert(wire, value);
        }
        Self(out)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Compute the fee applied when the caller leaves it out.
pub fn default_fee(transfers: &[Value], policy: FeePolicy) -> u64 {
    match policy {
        FeePolicy::PerMessageCharacter => {
            let characters: u64 = transfers
                .iter()
                .filter_map(|t| t.get("message").and_then(Value::as_str))
                .map(|m| m.chars().count() as u64)
                .sum();
            DEFAULT_FEE + characters * DEFAULT_CHARACTER_FEE
        }
        FeePolicy::PerTransfer => DEFAULT_FEE * transfers.len() as u64,
    }
}
