//! This module defines the single, unified error type for the entire uqpack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every error is surfaced to the caller as-is; nothing is retried or
//! recovered internally, and the library itself never logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UqPackError {
    // =========================================================================
    // === Frame & Header Errors (Specific to our wire format)
    // =========================================================================
    #[error("invalid frame format: expected <header>:<body>:<tag>")]
    InvalidFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("conflicting compression flags in header: {0:#03x}")]
    ConflictingFlags(u8),

    #[error("invalid character in encoded body: {0:?}")]
    InvalidCharacter(char),

    /// The received tag differs from the one computed over the body. Both are
    /// carried in the message so corrupted links can be diagnosed.
    #[error("checksum validation failed: computed {expected}, frame carries {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("unsupported type for this operation: {0}")]
    UnsupportedType(String),

    // =========================================================================
    // === Compression Kernel Errors
    // =========================================================================
    #[error("LZ4 operation failed: {0}")]
    Lz4Error(String),

    #[error("LZ4 body too short to contain the 4-byte size prefix: got {0} bytes")]
    TruncatedLz4Prefix(usize),

    #[error("Zstd operation failed: {0}")]
    ZstdError(String),

    #[error("Zstd frame does not declare its decompressed content size")]
    ZstdSizeUnknown,

    #[error("decompressed size does not match declared size: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Brotli operation failed: {0}")]
    BrotliError(String),

    // =========================================================================
    // === Serializer Errors
    // =========================================================================
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),
}
