use super::bch;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Symbol under construction: module colors plus the function-module mask.
/// `function` true = function module (not data), false = data module.
pub struct SymbolGrid {
    version: Version,
    pub(crate) modules: BitMatrix,
    function: BitMatrix,
}

impl SymbolGrid {
    /// Grid with finder, timing, alignment, version and (placeholder) format
    /// modules drawn and reserved.
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut grid = Self {
            version,
            modules: BitMatrix::square(size),
            function: BitMatrix::square(size),
        };

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            grid.set_function(6, i, i % 2 == 0);
            grid.set_function(i, 6, i % 2 == 0);
        }

        // Finder patterns + separators, clipped to bounds
        grid.draw_finder(3, 3);
        grid.draw_finder(size - 4, 3);
        grid.draw_finder(3, size - 4);

        // Alignment patterns, skipping the three finder corners
        let align = alignment_pattern_positions(version);
        let n = align.len();
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                let in_finder = (i == 0 && j == 0) || (i == 0 && j == n - 1) || (i == n - 1 && j == 0);
                if !in_finder {
                    grid.draw_alignment(cx, cy);
                }
            }
        }

        // Reserve format areas; real bits are written once the mask is known
        grid.draw_format_bits(ECLevel::M, MaskPattern::Pattern0);
        grid.draw_version();
        grid
    }

    /// Version the grid was laid out for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// True for finder, timing, alignment, format and version modules
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Color of the module at (x, y); true is dark
    pub fn module(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Final module matrix
    pub fn into_modules(self) -> BitMatrix {
        self.modules
    }

    /// Modules left for data and error correction codewords
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.function.count_set()
    }

    /// Write both copies of the format information plus the dark module
    pub fn draw_format_bits(&mut self, ec_level: ECLevel, mask: MaskPattern) {
        let bits = bch::format_bits(ec_level, mask);
        let bit = |i: usize| (bits >> i) & 1 != 0;
        let size = self.size();

        // First copy, around the top-left finder
        for i in 0..6 {
            self.set_function(8, i, bit(i));
        }
        self.set_function(8, 7, bit(6));
        self.set_function(8, 8, bit(7));
        self.set_function(7, 8, bit(8));
        for i in 9..15 {
            self.set_function(14 - i, 8, bit(i));
        }

        // Second copy, split between top-right and bottom-left
        for i in 0..8 {
            self.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            self.set_function(8, size - 15 + i, bit(i));
        }

        // Dark module
        self.set_function(8, size - 8, true);
    }

    /// Version info blocks (v7+): 6x3 above bottom-left, 3x6 left of top-right
    fn draw_version(&mut self) {
        let Some(bits) = bch::version_bits(self.version) else {
            return;
        };
        let size = self.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 != 0;
            let a = size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, dark);
            self.set_function(b, a, dark);
        }
    }

    /// 7x7 finder centered at (cx, cy) with its one-module light separator
    fn draw_finder(&mut self, cx: usize, cy: usize) {
        let size = self.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5x5 alignment pattern centered at (cx, cy)
    fn draw_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.function.set(x, y, true);
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = version.size();
    let step = if v == 32 {
        26
    } else {
        (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}
