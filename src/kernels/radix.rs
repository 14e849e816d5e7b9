//! This module contains the pure, stateless kernel for base-N conversion
//! between byte strings and alphabet strings.
//!
//! A byte sequence is interpreted as a single big-endian unsigned integer and
//! re-expressed in an arbitrary alphabet of 2 to 256 characters, most
//! significant digit first. The conversion is information-preserving for the
//! integer value only: leading `0x00` bytes are not recoverable from the
//! radix form alone, so payload layers that care (LZ4's size prefix) must
//! carry length metadata in-band.
//!
//! Big-integer division is digit-by-digit, O(n·m) in input and output
//! lengths, which is acceptable for URL-sized payloads.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::UqPackError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Converts bytes to their minimal base-N representation over `alphabet`.
///
/// Total and deterministic: empty input and an all-zero input both yield the
/// single character `alphabet[0]`; no other output begins with `alphabet[0]`.
pub fn to_base(bytes: &[u8], alphabet: &str) -> String {
    let digits: Vec<char> = alphabet.chars().collect();
    debug_assert!(
        (2..=256).contains(&digits.len()),
        "alphabet must have 2 to 256 characters"
    );

    let base = BigUint::from(digits.len());
    let mut value = BigUint::from_bytes_be(bytes);
    if value.is_zero() {
        return digits[0].to_string();
    }

    let mut out: Vec<char> = Vec::new();
    while !value.is_zero() {
        let remainder = &value % &base;
        // The remainder is always < base <= 256, so it fits in usize.
        out.push(digits[remainder.to_usize().unwrap()]);
        value = &value / &base;
    }
    out.reverse();
    out.into_iter().collect()
}

/// Inverse of [`to_base`] for strings composed solely of `alphabet`'s
/// characters; any other character fails with `InvalidCharacter`.
///
/// The zero representation (`alphabet[0]`) returns a single `0x00` byte;
/// everything else returns the minimal big-endian form with no leading zero
/// byte.
pub fn from_base(input: &str, alphabet: &str) -> Result<Vec<u8>, UqPackError> {
    let digits: Vec<char> = alphabet.chars().collect();
    let base = BigUint::from(digits.len());

    let mut value = BigUint::zero();
    for c in input.chars() {
        let digit = digits
            .iter()
            .position(|&d| d == c)
            .ok_or(UqPackError::InvalidCharacter(c))?;
        value = value * &base + BigUint::from(digit);
    }

    // `to_bytes_be` yields `[0x00]` for zero, which covers the zero
    // representation without a special case.
    Ok(value.to_bytes_be())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
