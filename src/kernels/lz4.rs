//! This module contains the pure, stateless kernel for LZ4 block compression
//! and decompression.
//!
//! LZ4's block format cannot recover the original size from its own stream,
//! so the encoder prepends a 4-byte little-endian length field. The field is
//! part of the compressed payload that gets radix-encoded, not of the wire
//! frame header. This module is a safe, panic-free wrapper around the
//! `lz4_flex` crate.

use crate::error::UqPackError;

/// The size of the little-endian original-length prefix.
const PREFIX_LEN: usize = 4;
/// A sane limit on the declared original size, guarding allocation from a
/// corrupt prefix. (16MB)
const MAX_ORIGINAL_SIZE: usize = 16 * 1024 * 1024;

//==================================================================================
// 1. Public API
//==================================================================================

/// Compresses a byte slice into `[u32 LE original_size] ++ LZ4 block`.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    let original_size = u32::try_from(input.len()).map_err(|_| {
        UqPackError::Lz4Error(format!(
            "input of {} bytes exceeds the u32 size prefix",
            input.len()
        ))
    })?;

    let compressed = lz4_flex::block::compress(input);

    let mut output = Vec::with_capacity(PREFIX_LEN + compressed.len());
    output.extend_from_slice(&original_size.to_le_bytes());
    output.extend_from_slice(&compressed);
    Ok(output)
}

/// Reads the original-size prefix and decompresses the remaining block.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, UqPackError> {
    if input.len() < PREFIX_LEN {
        return Err(UqPackError::TruncatedLz4Prefix(input.len()));
    }

    // The length check above guarantees the slice-to-array conversion.
    let prefix: [u8; PREFIX_LEN] = input[..PREFIX_LEN].try_into().unwrap();
    let original_size = u32::from_le_bytes(prefix) as usize;

    if original_size > MAX_ORIGINAL_SIZE {
        return Err(UqPackError::Lz4Error(format!(
            "declared original size {} exceeds maximum allowed size {}",
            original_size, MAX_ORIGINAL_SIZE
        )));
    }

    lz4_flex::block::decompress(&input[PREFIX_LEN..], original_size)
        .map_err(|e| UqPackError::Lz4Error(e.to_string()))
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lz4_roundtrip_simple_text() {
        let original = b"hello world, this is a test of lz4 compression. hello world.".to_vec();
        let compressed = encode(&original).unwrap();
        let decompressed = decode(&compressed).unwrap();
        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_lz4_roundtrip_highly_compressible_data() {
        let original = vec![42u8; 10_000];
        let compressed = encode(&original).unwrap();
        assert!(compressed.len() < original.len());
        let decompressed = decode(&compressed).unwrap();
        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_prefix_carries_original_size() {
        let original = b"abcdef".to_vec();
        let compressed = encode(&original).unwrap();
        let prefix: [u8; 4] = compressed[..4].try_into().unwrap();
        assert_eq!(u32::from_le_bytes(prefix), 6);
    }

    #[test]
    fn test_truncated_prefix_is_rejected() {
        let result = decode(&[0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(UqPackError::TruncatedLz4Prefix(3))));
    }

    #[test]
    fn test_oversized_declared_length_is_rejected() {
        let mut payload = (u32::MAX).to_le_bytes().to_vec();
        payload.extend_from_slice(&[0u8; 8]);
        let result = decode(&payload);
        assert!(matches!(result, Err(UqPackError::Lz4Error(_))));
    }

    #[test]
    fn test_truncated_block_is_rejected() {
        let original = b"some payload worth compressing, repeated and repeated".to_vec();
        let mut compressed = encode(&original).unwrap();
        // Drop the stream's final byte so the block can no longer produce
        // the declared number of bytes.
        compressed.pop();
        assert!(decode(&compressed).is_err());
    }
}
