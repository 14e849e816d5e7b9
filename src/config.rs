//! The single source of truth for all uqpack encoding configuration.
//!
//! This module defines the closed option sets that drive the pipeline
//! (`CompressionKind`, `SerializationKind`, `BaseIndex`), the SipHash key
//! used by the checksum, and the unified `EncodeOptions` struct created once
//! at the application boundary and passed into `encode_*` calls.

use serde::{Deserialize, Serialize};

use crate::format::{BASE64_URL, BASE70};

//==================================================================================
// I. Core Option Enums
//==================================================================================

/// The compression applied to the serialized payload before radix encoding.
/// Exactly one kind is active per message; the choice is recorded in the
/// header's cflag nibble so the decoder needs no out-of-band context.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionKind {
    /// No compression; the serialized bytes pass through unchanged.
    #[default]
    None,

    /// LZ4 block compression with a 4-byte little-endian original-size
    /// prefix inside the compressed body. Fast, and the default for the CLI.
    Lz4,

    /// Zstandard at level 1. The original size travels in Zstd's own frame
    /// header rather than an explicit prefix.
    Zstd,

    /// Brotli at quality 11. Slowest to encode, densest output.
    Brotli,
}

/// How a structured value is turned into payload bytes before compression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SerializationKind {
    /// Identity on byte arrays.
    Raw,

    /// UTF-8 bytes of a string. JSON values are dumped to compact JSON text
    /// on this path.
    Utf8String,

    /// MessagePack over a JSON-like value tree. The default for structured
    /// payloads; sets the MessagePack bit in the header's cflag.
    #[default]
    MessagePack,
}

/// Index selecting one of the fixed URL-safe alphabets.
///
/// Base64-URL is the default: Base70's `.` and `~` are URL-safe per
/// RFC 3986 but may be stripped by aggressive normalisers, so its ~2%
/// density win is opt-in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BaseIndex {
    #[default]
    Base64Url,
    Base70,
}

impl BaseIndex {
    /// The alphabet this index selects, in header-bit order.
    pub fn alphabet(self) -> &'static str {
        match self {
            BaseIndex::Base64Url => BASE64_URL,
            BaseIndex::Base70 => BASE70,
        }
    }

    /// The numeric index recorded in the header's eflag bit 0x1.
    pub fn index(self) -> u8 {
        match self {
            BaseIndex::Base64Url => 0,
            BaseIndex::Base70 => 1,
        }
    }
}

//==================================================================================
// II. Checksum Key
//==================================================================================

/// The 128-bit SipHash-2-4 key, split into two little-endian 64-bit halves.
///
/// The default key is public, so the tag is a keyed checksum against
/// accidental corruption, not a MAC. Callers that need a private key can
/// construct their own, at the cost of interoperability with default builds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipKey {
    pub k0: u64,
    pub k1: u64,
}

impl Default for SipKey {
    fn default() -> Self {
        // The byte sequence 00 01 02 .. 0F as two little-endian u64 halves.
        SipKey {
            k0: 0x0706050403020100,
            k1: 0x0F0E0D0C0B0A0908,
        }
    }
}

impl SipKey {
    /// Builds a key from a raw 16-byte sequence, little-endian halves.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut half = [0u8; 8];
        half.copy_from_slice(&bytes[..8]);
        let k0 = u64::from_le_bytes(half);
        half.copy_from_slice(&bytes[8..]);
        let k1 = u64::from_le_bytes(half);
        SipKey { k0, k1 }
    }
}

//==================================================================================
// III. The Unified EncodeOptions
//==================================================================================

/// Options for a single `encode_*` call. Missing fields deserialize to the
/// same defaults `EncodeOptions::default()` produces.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case", default)]
pub struct EncodeOptions {
    /// The compression kind recorded in the header's cflag.
    pub compression: CompressionKind,

    /// How structured values are serialized. Ignored by `encode_bytes` and
    /// `encode_str`, which fix their own serialization.
    pub serialization: SerializationKind,

    /// The alphabet to radix-encode with. `None` defers to the library's
    /// deterministic default (currently always Base64-URL).
    pub base_index: Option<BaseIndex>,

    /// The checksum key. Leave at default for interoperability.
    pub key: SipKey,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        // LZ4 + MessagePack is the interoperable default for JSON payloads.
        EncodeOptions {
            compression: CompressionKind::Lz4,
            serialization: SerializationKind::MessagePack,
            base_index: None,
            key: SipKey::default(),
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
