//! BCH codes protecting QR format and version information
use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR mask applied so the format word is never all zeros
const FORMAT_MASK: u16 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// 15-bit format information for an EC level and mask pattern
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.bits() as u32;
    let word = (data << 10) | remainder(data, FORMAT_GENERATOR, 10);
    word as u16 ^ FORMAT_MASK
}

/// 18-bit version information (versions 7-40 only)
pub fn version_bits(version: Version) -> Option<u32> {
    if !version.has_version_info() {
        return None;
    }
    let data = version.number() as u32;
    Some((data << 12) | remainder(data, VERSION_GENERATOR, 12))
}

/// Recover (EC level, mask) from an unmasked-and-masked 15-bit format word
pub fn decode_format_bits(word: u16) -> Option<(ECLevel, MaskPattern)> {
    let unmasked = (word ^ FORMAT_MASK) as u32;
    let data = unmasked >> 10;
    if remainder(data, FORMAT_GENERATOR, 10) != unmasked & 0x3FF {
        return None;
    }
    let ec_level = ECLevel::from_bits((data >> 3) as u8)?;
    let mask = MaskPattern::from_bits(data as u8)?;
    Some((ec_level, mask))
}

/// Remainder of `data * x^degree` modulo `generator`
fn remainder(data: u32, generator: u32, degree: u32) -> u32 {
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
    }
    rem & ((1 << degree) - 1)
}
