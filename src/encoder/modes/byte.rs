//! Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

/// Packs raw bytes, 8 bits each
pub struct ByteEncoder;

impl ByteEncoder {
    /// Encode every byte of `data`
    pub fn encode(data: &[u8]) -> BitBuffer {
        let mut bits = BitBuffer::new();
        for &b in data {
            bits.append_bits(b as u32, 8);
        }
        bits
    }
}
