//! Bit buffer and zigzag codeword placement
use super::function_patterns::SymbolGrid;

/// Append-only sequence of bits, most significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits were appended
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `len` bits of `value`, high bit first
    pub fn append_bits(&mut self, value: u32, len: usize) {
        debug_assert!(len <= 31 && value >> len == 0);
        for i in (0..len).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    /// Append all bits of `other`
    pub fn extend(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Bits in order of appending
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | ((b as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Write codewords into the data modules of the grid following the zigzag
/// pattern: column pairs from the right, alternating upward and downward,
/// skipping the vertical timing column.
pub fn place_codewords(grid: &mut SymbolGrid, codewords: &[u8]) {
    let size = grid.size();
    let total_bits = codewords.len() * 8;
    let mut bit_idx = 0;

    let mut right = size as isize - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let upward = ((right + 1) & 2) == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for j in 0..2 {
                let x = (right - j) as usize;
                if !grid.is_function(x, y) && bit_idx < total_bits {
                    let byte = codewords[bit_idx >> 3];
                    let dark = (byte >> (7 - (bit_idx & 7))) & 1 != 0;
                    grid.modules.set(x, y, dark);
                    bit_idx += 1;
                }
            }
        }
        right -= 2;
    }
    debug_assert_eq!(bit_idx, total_bits);
}
