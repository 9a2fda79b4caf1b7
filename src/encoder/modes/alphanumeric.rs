//! Alphanumeric mode encoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitBuffer;

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    fn index_of(c: u8) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|i| i as u32)
    }

    /// True when every byte is in the 45-character set
    pub fn can_encode(data: &[u8]) -> bool {
        data.iter().all(|&c| Self::index_of(c).is_some())
    }

    /// Encode characters from the 45-symbol set; caller guarantees `can_encode`
    pub fn encode(text: &[u8]) -> BitBuffer {
        let mut bits = BitBuffer::new();
        for pair in text.chunks(2) {
            let values: Vec<u32> = pair.iter().filter_map(|&c| Self::index_of(c)).collect();
            match values.as_slice() {
                [a, b] => bits.append_bits(a * 45 + b, 11),
                [a] => bits.append_bits(*a, 6),
                _ => {}
            }
        }
        bits
    }
}
