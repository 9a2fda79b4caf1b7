//! Numeric mode encoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;

/// Packs ASCII digits in groups of three
pub struct NumericEncoder;

impl NumericEncoder {
    /// True when every byte is an ASCII digit
    pub fn can_encode(data: &[u8]) -> bool {
        data.iter().all(u8::is_ascii_digit)
    }

    /// Encode ASCII digits; caller guarantees `can_encode`
    pub fn encode(digits: &[u8]) -> BitBuffer {
        let mut bits = BitBuffer::new();
        for group in digits.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            bits.append_bits(value, group.len() * 3 + 1);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_encode() {
        // "01234567" -> 012 | 345 | 67
        let bits = NumericEncoder::encode(b"01234567");
        assert_eq!(bits.len(), 10 + 10 + 7);
        let mut expected = BitBuffer::new();
        expected.append_bits(12, 10);
        expected.append_bits(345, 10);
        expected.append_bits(67, 7);
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_numeric_single_digit() {
        let bits = NumericEncoder::encode(b"7");
        assert_eq!(bits.as_bits(), &[false, true, true, true]);
    }

    #[test]
    fn test_can_encode() {
        assert!(NumericEncoder::can_encode(b"0123"));
        assert!(!NumericEncoder::can_encode(b"12a"));
    }
}
