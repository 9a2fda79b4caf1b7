//! QR code data mode encoders
//!
//! This module contains encoders for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and a few symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)

/// Alphanumeric mode
pub mod alphanumeric;
/// Byte mode
pub mod byte;
/// Numeric mode
pub mod numeric;

use super::bitstream::BitBuffer;
use crate::models::Version;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// Segment data mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// 45-character upper-case set
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for a version
    pub fn char_count_bits(&self, version: Version) -> usize {
        let group = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][group],
            Mode::Alphanumeric => [9, 11, 13][group],
            Mode::Byte => [8, 16, 16][group],
        }
    }
}

/// A run of data in a single mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Encoding mode
    pub mode: Mode,
    /// Character count written to the header
    pub num_chars: usize,
    /// Encoded payload bits
    pub data: BitBuffer,
}

impl Segment {
    /// Pick the most compact single mode that can represent `value`
    pub fn auto(value: &[u8]) -> Self {
        if NumericEncoder::can_encode(value) {
            Self::numeric(value)
        } else if AlphanumericEncoder::can_encode(value) {
            Self::alphanumeric(value)
        } else {
            Self::bytes(value)
        }
    }

    /// Numeric segment; `digits` must be ASCII 0-9
    pub fn numeric(digits: &[u8]) -> Self {
        Self {
            mode: Mode::Numeric,
            num_chars: digits.len(),
            data: NumericEncoder::encode(digits),
        }
    }

    /// Alphanumeric segment; `text` must be in the 45-character set
    pub fn alphanumeric(text: &[u8]) -> Self {
        Self {
            mode: Mode::Alphanumeric,
            num_chars: text.len(),
            data: AlphanumericEncoder::encode(text),
        }
    }

    /// Byte segment holding `data` as is
    pub fn bytes(data: &[u8]) -> Self {
        Self {
            mode: Mode::Byte,
            num_chars: data.len(),
            data: ByteEncoder::encode(data),
        }
    }

    /// Bits needed at `version`, `None` if the count field overflows
    pub fn total_bits(&self, version: Version) -> Option<usize> {
        let cc_bits = self.mode.char_count_bits(version);
        if self.num_chars >= 1 << cc_bits {
            return None;
        }
        Some(4 + cc_bits + self.data.len())
    }

    /// Append mode indicator, character count and payload
    pub fn write_to(&self, version: Version, out: &mut BitBuffer) {
        out.append_bits(self.mode.indicator(), 4);
        out.append_bits(self.num_chars as u32, self.mode.char_count_bits(version));
        out.extend(&self.data);
    }
}
