//! The uniform compression adapter over the codec kernels.
//!
//! The orchestrator names a `CompressionKind`; this module dispatches to the
//! matching kernel. Each kernel carries whatever metadata it needs to invert
//! itself (LZ4's explicit size prefix, Zstd's frame-header content size,
//! Brotli's self-terminating stream), so the pair below is a true inverse
//! for every kind.

use crate::config::CompressionKind;
use crate::error::UqPackError;
use crate::kernels;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses serialized payload bytes with the chosen codec.
pub fn compress(kind: CompressionKind, bytes: &[u8]) -> Result<Vec<u8>, UqPackError> {
    match kind {
        CompressionKind::None => Ok(bytes.to_vec()),
        CompressionKind::Lz4 => kernels::lz4::encode(bytes),
        CompressionKind::Zstd => kernels::zstd::encode(bytes),
        CompressionKind::Brotli => kernels::brotli::encode(bytes),
    }
}

/// Inverts [`compress`] for the codec named by the frame header.
pub fn decompress(kind: CompressionKind, bytes: &[u8]) -> Result<Vec<u8>, UqPackError> {
    match kind {
        CompressionKind::None => Ok(bytes.to_vec()),
        CompressionKind::Lz4 => kernels::lz4::decode(bytes),
        CompressionKind::Zstd => kernels::zstd::decode(bytes),
        CompressionKind::Brotli => kernels::brotli::decode(bytes),
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
