//! The serializer adapter: turning structured values into payload bytes on
//! encode, and reinterpreting decompressed bytes for the caller's requested
//! type on decode.
//!
//! Decode is typed through the [`FromPayload`] trait, the seam that mirrors
//! the encode-side entry points: byte vectors are identity, strings are
//! UTF-8, and JSON values follow the header (MessagePack when the bit is
//! set, JSON text otherwise). A type without an impl simply cannot be
//! requested, which moves the unsupported-type failure to compile time.

use serde_json::Value;

use crate::config::SerializationKind;
use crate::error::UqPackError;
use crate::format::Header;
use crate::kernels::msgpack;

//==================================================================================
// 1. Encode Side
//==================================================================================

/// Serializes a JSON value tree according to the chosen kind.
///
/// `Raw` has no meaning for a structured value and is rejected with
/// `UnsupportedType`; byte payloads enter the pipeline through
/// `encode_bytes` instead.
pub fn serialize_json(value: &Value, kind: SerializationKind) -> Result<Vec<u8>, UqPackError> {
    match kind {
        SerializationKind::MessagePack => msgpack::encode(value),
        SerializationKind::Utf8String => Ok(value.to_string().into_bytes()),
        SerializationKind::Raw => Err(UqPackError::UnsupportedType(
            "raw serialization cannot encode a JSON value".into(),
        )),
    }
}

//==================================================================================
// 2. Decode Side
//==================================================================================

/// A target type that decoded payload bytes can be reinterpreted as.
///
/// The header is passed in so that self-describing payloads (the
/// MessagePack cflag bit) take precedence over assumptions baked into the
/// target type.
pub trait FromPayload: Sized {
    fn from_payload(bytes: Vec<u8>, header: &Header) -> Result<Self, UqPackError>;
}

/// Raw bytes: identity.
impl FromPayload for Vec<u8> {
    fn from_payload(bytes: Vec<u8>, _header: &Header) -> Result<Self, UqPackError> {
        Ok(bytes)
    }
}

/// Strings: UTF-8 decoding of the payload.
impl FromPayload for String {
    fn from_payload(bytes: Vec<u8>, _header: &Header) -> Result<Self, UqPackError> {
        String::from_utf8(bytes).map_err(|e| UqPackError::DeserializationFailed(e.to_string()))
    }
}

/// JSON values: the header's MessagePack bit is trusted; without it the
/// payload is parsed as JSON text.
impl FromPayload for Value {
    fn from_payload(bytes: Vec<u8>, header: &Header) -> Result<Self, UqPackError> {
        if header.uses_messagepack() {
            msgpack::decode(&bytes)
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| UqPackError::DeserializationFailed(e.to_string()))
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
