//! This module contains the pure, stateless kernel for the frame checksum.
//!
//! The tag is SipHash-2-4 over the UTF-8 bytes of the radix-encoded body,
//! keyed with a 128-bit key, rendered through the Base64-URL alphabet and
//! truncated to two characters. Twelve bits of tag are sufficient against
//! accidental corruption of URL-sized payloads; SipHash is used instead of a
//! CRC so structured inputs cannot be trivially nudged into near-collisions.
//!
//! The tag covers the body only, not the header: the header is short and
//! cross-checked structurally on decode.

use std::hash::Hasher;

use siphasher::sip::SipHasher24;

use crate::config::SipKey;
use crate::format::{BASE64_URL, TAG_LEN};
use crate::kernels::radix;

//==================================================================================
// 1. Public API
//==================================================================================

/// Computes the two-character checksum tag for a radix-encoded body.
///
/// Pure function: the result depends only on the body bytes and the key.
pub fn checksum(body: &str, key: &SipKey) -> String {
    let mut hasher = SipHasher24::new_with_keys(key.k0, key.k1);
    hasher.write(body.as_bytes());
    let hash = hasher.finish();

    // Minimal MSD-first Base64-URL rendering of the 64-bit hash, truncated
    // to its two most significant digits.
    radix::to_base(&hash.to_be_bytes(), BASE64_URL)
        .chars()
        .take(TAG_LEN)
        .collect()
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
