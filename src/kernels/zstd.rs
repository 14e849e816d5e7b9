//! This module contains the pure, stateless kernel for Zstandard compression
//! and decompression.
//!
//! Unlike LZ4, Zstd embeds the decompressed content size in its own frame
//! header, so no explicit prefix is needed. The encoder cross-checks the
//! stored size against the input it was given; the decoder reads it back to
//! size the output allocation exactly. This module is a safe, panic-free
//! wrapper around the `zstd` crate.

use crate::error::UqPackError;

/// Compression level. URL payloads are small; speed wins over ratio here.
const LEVEL: i32 = 1;
/// A sane limit on the declared content size, guarding allocation from a
/// corrupt frame header. (16MB)
const MAX_CONTENT_SIZE: u64 = 16 * 1024 * 1024;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses a byte slice into a single Zstd frame carrying its content size.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    let compressed =
        zstd::bulk::compress(input, LEVEL).map_err(|e| UqPackError::ZstdError(e.to_string()))?;

    // Read the stored size back out of the frame we just produced and
    // cross-check it against the input length.
    let stored = content_size(&compressed)?;
    if stored != input.len() as u64 {
        return Err(UqPackError::LengthMismatch {
            expected: input.len(),
            actual: stored as usize,
        });
    }

    Ok(compressed)
}

/// Decompresses a single Zstd frame, sized by its stored content size.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    let stored = content_size(input)?;
    if stored > MAX_CONTENT_SIZE {
        return Err(UqPackError::ZstdError(format!(
            "declared content size {} exceeds maximum allowed size {}",
            stored, MAX_CONTENT_SIZE
        )));
    }

    let decompressed = zstd::bulk::decompress(input, stored as usize)
        .map_err(|e| UqPackError::ZstdError(e.to_string()))?;

    if decompressed.len() as u64 != stored {
        return Err(UqPackError::LengthMismatch {
            expected: stored as usize,
            actual: decompressed.len(),
        });
    }

    Ok(decompressed)
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

/// Reads the declared content size from a Zstd frame header.
fn content_size(frame: &[u8]) -> Result<u64, UqPackError> {
    zstd::zstd_safe::get_frame_content_size(frame)
        .map_err(|_| UqPackError::ZstdError("cannot read content size from frame header".into()))?
        .ok_or(UqPackError::ZstdSizeUnknown)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
