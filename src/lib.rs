//! This file is the root of the `uqpack` crate.
//!
//! uqpack packs small structured payloads (typically JSON) into compact,
//! URL-safe strings and recovers them, authenticating against accidental
//! corruption. The pipeline is serialize → compress → radix-encode → frame,
//! with a self-describing 4-character header so a receiver needs no
//! out-of-band context beyond the checksum key.
//!
//! The checksum is a keyed hash, not a MAC: the default key is public, and
//! the tag guards against corruption, not tampering. The whole payload is
//! processed in one shot; big-integer radix conversion makes the library a
//! poor fit for large payloads.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use uqpack::{decode_json, encode_json, EncodeOptions};
//!
//! let value = json!({"a": 1, "b": [1, 2, 3]});
//! let encoded = encode_json(&value, &EncodeOptions::default()).unwrap();
//! assert_eq!(decode_json(&encoded).unwrap(), value);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod config;
pub mod format;
pub mod kernels;

mod error;
mod pipeline;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use config::{BaseIndex, CompressionKind, EncodeOptions, SerializationKind, SipKey};
pub use error::UqPackError;
pub use pipeline::orchestrator::{
    decode, decode_bytes, decode_json, decode_string, decode_with_key, encode_bytes, encode_json,
    encode_str,
};
pub use pipeline::serializer::FromPayload;
