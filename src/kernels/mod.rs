//! This module is the collection of all pure, stateless kernels the pipeline
//! composes into the encode/decode chain.
//!
//! Each sub-module wraps one algorithmic primitive behind a small, panic-free
//! API. The `pipeline` layer is the designated consumer and calls them via
//! their full path (e.g. `kernels::radix::to_base`), which keeps the
//! dependency graph explicit.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Big-integer base-N conversion between bytes and alphabet strings.
pub mod radix;

/// Keyed SipHash-2-4 checksum tag.
pub mod checksum;

/// LZ4 block compression with an explicit original-size prefix.
pub mod lz4;

/// Zstandard compression, content size carried in the Zstd frame header.
pub mod zstd;

/// Brotli compression at maximum quality.
pub mod brotli;

/// MessagePack codec over a JSON-like value tree.
pub mod msgpack;
