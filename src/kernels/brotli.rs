//! This module contains the pure, stateless kernel for Brotli compression
//! and decompression.
//!
//! Brotli is the densest of the supported codecs and the slowest to encode;
//! it exists for payloads where every URL character counts. Encoding runs at
//! maximum quality. Decoding streams into a growable buffer, so no size
//! metadata is required. This module is a safe, panic-free wrapper around
//! the `brotli` crate.

use std::io::Cursor;

use brotli::enc::BrotliEncoderParams;

use crate::error::UqPackError;

/// Maximum quality: payloads are tiny, so encode cost is irrelevant.
const QUALITY: i32 = 11;
/// Log2 of the sliding window; 22 comfortably covers URL-sized payloads.
const LGWIN: i32 = 22;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses a byte slice into a Brotli stream.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    let params = BrotliEncoderParams {
        quality: QUALITY,
        lgwin: LGWIN,
        ..Default::default()
    };

    let mut output = Vec::new();
    brotli::BrotliCompress(&mut Cursor::new(input), &mut output, &params)
        .map_err(|e| UqPackError::BrotliError(e.to_string()))?;
    Ok(output)
}

/// Decompresses a Brotli stream into a growable buffer.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    let mut output = Vec::new();
    brotli::BrotliDecompress(&mut Cursor::new(input), &mut output)
        .map_err(|e| UqPackError::BrotliError(e.to_string()))?;
    Ok(output)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
