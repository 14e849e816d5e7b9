//! Defines all on-wire constants and structures for the uqpack frame format.
//! This is the single source of truth for the header magic, the flag-bit
//! schema, and the URL-safe alphabets. It establishes the contract that lets
//! a receiver decode a frame with no out-of-band context beyond the key.

use crate::config::{BaseIndex, CompressionKind};
use crate::error::UqPackError;

//==================================================================================
// I. Wire Constants
//==================================================================================

/// The literal prefix identifying a uqpack frame header.
pub const HEADER_MAGIC: &str = "PX";
/// Total header length in bytes: the magic plus two hex flag nibbles.
pub const HEADER_LEN: usize = 4;
/// The checksum tag length in bytes.
pub const TAG_LEN: usize = 2;

/// Alphabet 0: Base64 URL-safe, `A-Z a-z 0-9 - _`.
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
/// Alphabet 1: Base70, `0-9 A-Z a-z - _ . ~`.
pub const BASE70: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_.~";

/// cflag bit: LZ4 compression used.
pub const CFLAG_LZ4: u8 = 0x1;
/// cflag bit: MessagePack serialization used.
pub const CFLAG_MSGPACK: u8 = 0x2;
/// cflag bit: Zstd compression used.
pub const CFLAG_ZSTD: u8 = 0x4;
/// cflag bit: Brotli compression used.
pub const CFLAG_BROTLI: u8 = 0x8;

/// eflag bit: alphabet index (0 = Base64-URL, 1 = Base70).
pub const EFLAG_BASE70: u8 = 0x1;
/// eflag bits reserved for extension. Written as zero, rejected as nonzero.
const EFLAG_RESERVED: u8 = 0xE;

//==================================================================================
// II. Header
//==================================================================================

/// The parsed form of the 4-character frame header `"PX" <cflag> <eflag>`.
///
/// The raw nibbles are kept as-is so that structural validation (hex digits,
/// magic, reserved bits) is separable from semantic validation (at most one
/// compression bit), which the orchestrator performs after the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    cflag: u8,
    eflag: u8,
}

impl Header {
    /// Assembles a header for the encode side. The resulting flags are
    /// well-formed by construction.
    pub fn new(compression: CompressionKind, uses_messagepack: bool, base_index: BaseIndex) -> Self {
        let mut cflag = match compression {
            CompressionKind::None => 0,
            CompressionKind::Lz4 => CFLAG_LZ4,
            CompressionKind::Zstd => CFLAG_ZSTD,
            CompressionKind::Brotli => CFLAG_BROTLI,
        };
        if uses_messagepack {
            cflag |= CFLAG_MSGPACK;
        }
        let eflag = match base_index {
            BaseIndex::Base64Url => 0,
            BaseIndex::Base70 => EFLAG_BASE70,
        };
        Header { cflag, eflag }
    }

    /// Parses and structurally validates a 4-character header slice.
    ///
    /// Checks length, the `"PX"` magic, that both flag characters are hex
    /// digits, and that reserved eflag bits are zero. Whether the cflag's
    /// compression bits conflict is left to [`Header::compression`].
    pub fn parse(input: &str) -> Result<Self, UqPackError> {
        if input.len() != HEADER_LEN || !input.starts_with(HEADER_MAGIC) {
            return Err(UqPackError::InvalidHeader(format!(
                "expected 4 characters starting with {:?}, got {:?}",
                HEADER_MAGIC, input
            )));
        }

        let mut nibbles = input[HEADER_MAGIC.len()..].chars().map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| UqPackError::InvalidHeader(format!("flag {:?} is not a hex digit", c)))
        });
        // The length check above guarantees exactly two flag characters.
        let cflag = nibbles.next().unwrap()?;
        let eflag = nibbles.next().unwrap()?;

        if eflag & EFLAG_RESERVED != 0 {
            return Err(UqPackError::InvalidHeader(format!(
                "reserved eflag bits set: {:#03x}",
                eflag
            )));
        }

        Ok(Header { cflag, eflag })
    }

    /// Renders the header back to its 4-character wire form.
    pub fn render(&self) -> String {
        format!("{}{:X}{:X}", HEADER_MAGIC, self.cflag, self.eflag)
    }

    /// Resolves the compression kind from the cflag bits.
    ///
    /// At most one of the LZ4/Zstd/Brotli bits may be set; any other
    /// combination is rejected with `ConflictingFlags`.
    pub fn compression(&self) -> Result<CompressionKind, UqPackError> {
        let compression_bits = self.cflag & (CFLAG_LZ4 | CFLAG_ZSTD | CFLAG_BROTLI);
        match compression_bits {
            0 => Ok(CompressionKind::None),
            CFLAG_LZ4 => Ok(CompressionKind::Lz4),
            CFLAG_ZSTD => Ok(CompressionKind::Zstd),
            CFLAG_BROTLI => Ok(CompressionKind::Brotli),
            _ => Err(UqPackError::ConflictingFlags(self.cflag)),
        }
    }

    /// True when the MessagePack serialization bit is set.
    pub fn uses_messagepack(&self) -> bool {
        self.cflag & CFLAG_MSGPACK != 0
    }

    /// The alphabet index carried in the eflag.
    pub fn base_index(&self) -> BaseIndex {
        if self.eflag & EFLAG_BASE70 != 0 {
            BaseIndex::Base70
        } else {
            BaseIndex::Base64Url
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
