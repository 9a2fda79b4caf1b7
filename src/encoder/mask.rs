//! Data masking and mask penalty scoring
use super::function_patterns::SymbolGrid;
use crate::models::MaskPattern;

const PENALTY_N1: usize = 3;
const PENALTY_N2: usize = 3;
const PENALTY_N3: usize = 40;
const PENALTY_N4: usize = 10;

/// XOR the mask over every data module. Applying the same mask twice restores
/// the grid.
pub fn apply_mask(grid: &mut SymbolGrid, mask: MaskPattern) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if !grid.is_function(x, y) && mask.is_masked(y, x) {
                grid.modules.toggle(x, y);
            }
        }
    }
}

/// Penalty score of the current grid; lower is better
pub fn penalty_score(grid: &SymbolGrid) -> usize {
    let size = grid.size();
    let mut result = 0;

    // Runs of same-colored modules and finder-like patterns, rows then columns
    for y in 0..size {
        result += line_penalty(size, |i| grid.module(i, y));
    }
    for x in 0..size {
        result += line_penalty(size, |i| grid.module(x, i));
    }

    // 2x2 blocks of one color
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = grid.module(x, y);
            if c == grid.module(x + 1, y) && c == grid.module(x, y + 1) && c == grid.module(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // Dark/light balance, in 5% steps away from 50%
    let dark = grid.modules.count_set();
    let total = size * size;
    let deviation = (dark * 20).abs_diff(total * 10);
    let k = deviation.div_ceil(total).saturating_sub(1);
    result += k * PENALTY_N4;

    result
}

fn line_penalty(size: usize, module: impl Fn(usize) -> bool) -> usize {
    let mut result = 0;
    let mut history = RunHistory::new(size);
    let mut run_color = false;
    let mut run_len = 0;

    for i in 0..size {
        if module(i) == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_color {
                result += history.count_patterns() * PENALTY_N3;
            }
            run_color = module(i);
            run_len = 1;
        }
    }
    result + history.terminate(run_color, run_len) * PENALTY_N3
}

/// Lengths of the last seven runs, newest first, for spotting 1:1:3:1:1
/// finder-like sequences bordered by light space.
struct RunHistory {
    size: usize,
    runs: [usize; 7],
}

impl RunHistory {
    fn new(size: usize) -> Self {
        Self { size, runs: [0; 7] }
    }

    fn push(&mut self, mut run_len: usize) {
        // The first run is preceded by the light quiet zone
        if self.runs[0] == 0 {
            run_len += self.size;
        }
        self.runs.copy_within(0..6, 1);
        self.runs[0] = run_len;
    }

    fn count_patterns(&self) -> usize {
        let r = &self.runs;
        let n = r[1];
        let core = n > 0 && r[2] == n && r[3] == n * 3 && r[4] == n && r[5] == n;
        (core && r[0] >= n * 4 && r[6] >= n) as usize + (core && r[6] >= n * 4 && r[0] >= n) as usize
    }

    fn terminate(&mut self, run_color: bool, mut run_len: usize) -> usize {
        if run_color {
            self.push(run_len);
            run_len = 0;
        }
        // Trailing quiet zone
        run_len += self.size;
        self.push(run_len);
        self.count_patterns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_apply_mask_twice_restores() {
        let mut grid = SymbolGrid::new(Version::MIN);
        let before = grid.modules.clone();
        apply_mask(&mut grid, MaskPattern::Pattern5);
        assert_ne!(grid.modules, before);
        apply_mask(&mut grid, MaskPattern::Pattern5);
        assert_eq!(grid.modules, before);
    }

    #[test]
    fn test_mask_leaves_function_modules() {
        let mut grid = SymbolGrid::new(Version::MIN);
        apply_mask(&mut grid, MaskPattern::Pattern0);
        // Finder corner and timing untouched
        assert!(grid.module(0, 0));
        assert!(grid.module(8, 6));
        assert!(!grid.module(9, 6));
    }

    #[test]
    fn test_long_run_penalty() {
        // Single light line of 21: one run of 21 -> 3 + 16
        assert_eq!(line_penalty(21, |_| false), 3 + 16);
    }

    #[test]
    fn test_finder_like_run_penalised() {
        // light x4, dark, light, dark x3, light, dark, light x4
        let line = [
            false, false, false, false, true, false, true, true, true, false, true, false, false,
            false, false,
        ];
        assert!(line_penalty(line.len(), |i| line[i]) >= PENALTY_N3);
    }
}
