//! The orchestrator: the public encode/decode entry points that route a
//! payload through the full pipeline and its exact inverse.
//!
//! Encode runs serialize → compress → radix-encode → frame; decode runs
//! unframe → checksum → radix-decode → decompress → deserialize. Each call
//! is independent: there is no state machine, cache, or global beyond the
//! compile-time default checksum key.

use serde_json::Value;

use crate::config::{BaseIndex, EncodeOptions, SerializationKind, SipKey};
use crate::error::UqPackError;
use crate::format::Header;
use crate::kernels::{checksum, radix};
use crate::pipeline::serializer::{self, FromPayload};
use crate::pipeline::{compression, frame};

//==================================================================================
// 1. Encode API
//==================================================================================

/// Encodes a JSON value tree into a URL-safe frame.
///
/// The value is serialized per `options.serialization` (MessagePack by
/// default, compact JSON text for `Utf8String`), then compressed, radix
/// encoded, and framed.
pub fn encode_json(value: &Value, options: &EncodeOptions) -> Result<String, UqPackError> {
    let serialized = serializer::serialize_json(value, options.serialization)?;
    let uses_messagepack = options.serialization == SerializationKind::MessagePack;
    encode_payload(&serialized, uses_messagepack, options)
}

/// Encodes a string as its UTF-8 bytes.
pub fn encode_str(input: &str, options: &EncodeOptions) -> Result<String, UqPackError> {
    encode_payload(input.as_bytes(), false, options)
}

/// Encodes raw bytes as-is.
///
/// Leading `0x00` bytes do not survive the radix step; callers that need
/// them preserved must carry length metadata themselves.
pub fn encode_bytes(input: &[u8], options: &EncodeOptions) -> Result<String, UqPackError> {
    encode_payload(input, false, options)
}

/// The shared encode pipeline behind all entry points.
fn encode_payload(
    serialized: &[u8],
    uses_messagepack: bool,
    options: &EncodeOptions,
) -> Result<String, UqPackError> {
    // 1. Compress the serialized payload.
    let compressed = compression::compress(options.compression, serialized)?;

    // 2. Pick the alphabet: explicit choice, or the deterministic default.
    let base_index = options
        .base_index
        .unwrap_or_else(|| select_base_index(serialized));

    // 3. Radix-encode the compressed payload into the body string.
    let body = radix::to_base(&compressed, base_index.alphabet());

    // 4. Assemble the self-describing header.
    let header = Header::new(options.compression, uses_messagepack, base_index);

    // 5. Authenticate the body.
    let tag = checksum::checksum(&body, &options.key);

    // 6. Compose the final frame.
    Ok(frame::frame(&header, &body, &tag))
}

/// The deterministic default alphabet for unspecified `base_index`.
///
/// The header can express Base70, but Base64-URL survives aggressive URL
/// normalisers, so it stays the fixed choice. Any future heuristic must
/// remain a pure function of the serialized input.
fn select_base_index(_serialized: &[u8]) -> BaseIndex {
    BaseIndex::Base64Url
}

//==================================================================================
// 2. Decode API
//==================================================================================

/// Decodes a URL-safe frame into the requested target type, using the
/// default checksum key.
pub fn decode<T: FromPayload>(input: &str) -> Result<T, UqPackError> {
    decode_with_key(input, &SipKey::default())
}

/// Decodes a URL-safe frame under an explicit checksum key.
pub fn decode_with_key<T: FromPayload>(input: &str, key: &SipKey) -> Result<T, UqPackError> {
    // 1. Split the frame and validate its structure.
    let parts = frame::unframe(input)?;

    // 2. Verify the checksum before trusting anything else in the body.
    let expected = checksum::checksum(parts.body, key);
    if expected != parts.tag {
        return Err(UqPackError::ChecksumMismatch {
            expected,
            actual: parts.tag.to_string(),
        });
    }

    // 3. Resolve the compression kind; conflicting flag combinations stop here.
    let kind = parts.header.compression()?;

    // 4. Radix-decode the body with the alphabet named by the header.
    let compressed = radix::from_base(parts.body, parts.header.base_index().alphabet())?;

    // 5. Undo compression.
    let serialized = compression::decompress(kind, &compressed)?;

    // 6. Reinterpret the payload for the requested target type.
    T::from_payload(serialized, &parts.header)
}

/// Decodes a frame into raw payload bytes.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, UqPackError> {
    decode(input)
}

/// Decodes a frame into a UTF-8 string.
pub fn decode_string(input: &str) -> Result<String, UqPackError> {
    decode(input)
}

/// Decodes a frame into a JSON value tree.
pub fn decode_json(input: &str) -> Result<Value, UqPackError> {
    decode(input)
}
