//! This module contains the pure, stateless kernel for MessagePack
//! serialization of JSON-like value trees.
//!
//! The dynamic `serde_json::Value` is the payload type: `null`, booleans,
//! integers, floats, strings, arrays, and string-keyed maps. Round-trips are
//! value-equal subject to MessagePack's integer-width rules. This module is
//! a thin wrapper around the `rmp-serde` crate.

use serde_json::Value;

use crate::error::UqPackError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Serializes a JSON value tree into MessagePack bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>, UqPackError> {
    rmp_serde::to_vec(value).map_err(|e| UqPackError::SerializationFailed(e.to_string()))
}

/// Deserializes MessagePack bytes back into a JSON value tree.
pub fn decode(bytes: &[u8]) -> Result<Value, UqPackError> {
    rmp_serde::from_slice(bytes).map_err(|e| UqPackError::DeserializationFailed(e.to_string()))
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
