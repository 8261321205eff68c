use crate::grids::patterns::{Part, PatternTable, LATTICE_SIZE, STEPS_PER_PATTERN};

/// Map coordinates per lattice cell, as a shift
const CELL_SHIFT: u8 = 6;
const CELL_MASK: u8 = (1 << CELL_SHIFT) - 1;

/// Fixed-point crossfade between two levels.
/// `balance` 0 returns `a` exactly; the product is truncated, never rounded.
#[inline]
pub fn u8_mix(a: u8, b: u8, balance: u8) -> u8 {
    let balance = balance as u32;
    ((a as u32 * (256 - balance) + b as u32 * balance) >> 8) as u8
}

/// Blended level of `part` at `step` for the map position (x, y).
///
/// The four nodes around (x, y) are mixed along x first, then along y.
/// Neighbours past the last lattice row/column reuse the edge node.
pub fn interpolate(table: &PatternTable, x: u8, y: u8, step: usize, part: Part) -> u8 {
    let i = (x >> CELL_SHIFT) as usize;
    let j = (y >> CELL_SHIFT) as usize;
    let i_next = (i + 1).min(LATTICE_SIZE - 1);
    let j_next = (j + 1).min(LATTICE_SIZE - 1);

    let a = table.level(i, j, part, step);
    let b = table.level(i_next, j, part, step);
    let c = table.level(i, j_next, part, step);
    let d = table.level(i_next, j_next, part, step);

    let x_balance = (x & CELL_MASK) << 2;
    let y_balance = (y & CELL_MASK) << 2;

    u8_mix(u8_mix(a, b, x_balance), u8_mix(c, d, x_balance), y_balance)
}

/// Levels for a whole pattern of one part, e.g. for drawing the map
pub fn interpolate_pattern(table: &PatternTable, x: u8, y: u8, part: Part) -> [u8; STEPS_PER_PATTERN] {
    let mut levels = [0u8; STEPS_PER_PATTERN];
    for (step, level) in levels.iter_mut().enumerate() {
        *level = interpolate(table, x, y, step, part);
    }
    levels
}
