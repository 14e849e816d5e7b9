//! The frame codec: composing and decomposing the canonical wire form
//! `<header:4> ':' <body> ':' <tag:2>`.
//!
//! Slicing happens at the first and last `:` in the input. Neither alphabet
//! contains `:`, so for any well-formed frame this is equivalent to exact
//! two-separator framing; inputs with extra interior colons fall out
//! naturally as checksum or character failures downstream.

use crate::error::UqPackError;
use crate::format::{Header, TAG_LEN};

//==================================================================================
// 1. Public Structs
//==================================================================================

/// The three slices of a wire frame, with the header already structurally
/// validated. Checksum verification and alphabet selection stay with the
/// orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameParts<'a> {
    pub header: Header,
    pub body: &'a str,
    pub tag: &'a str,
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Assembles the final wire string from its parts.
pub fn frame(header: &Header, body: &str, tag: &str) -> String {
    format!("{}:{}:{}", header.render(), body, tag)
}

/// Splits a wire string into header, body, and tag, validating structure.
pub fn unframe(input: &str) -> Result<FrameParts<'_>, UqPackError> {
    let first = input.find(':').ok_or(UqPackError::InvalidFormat)?;
    let last = input.rfind(':').ok_or(UqPackError::InvalidFormat)?;
    if first == last {
        return Err(UqPackError::InvalidFormat);
    }

    // `:` is ASCII, so these byte offsets are char boundaries.
    let header_str = &input[..first];
    let body = &input[first + 1..last];
    let tag = &input[last + 1..];

    if body.is_empty() || tag.len() != TAG_LEN {
        return Err(UqPackError::InvalidFormat);
    }

    let header = Header::parse(header_str)?;
    Ok(FrameParts { header, body, tag })
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
