/// Seed used when a generator is not given one
pub const DEFAULT_SEED: u32 = 0x21;

/// Linear congruential generator driving the chaos control.
/// Identical seeds give identical byte sequences on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Random {
    state: u32,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from the process-wide entropy source, for sessions that
    /// don't need to be replayed
    pub fn from_entropy() -> Self {
        Self::new(fastrand::u32(..))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Top 8 bits of the next state; the low bits of an LCG are poor
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Apply chaos to a hit decision.
///
/// With `randomness == 0` the decision passes through and `rng` is left alone.
/// Otherwise one byte is drawn and scaled by `randomness`; when it exceeds the
/// distance between `level` and `threshold`, the decision is inverted.
pub fn perturb(hit: bool, level: u8, threshold: u8, randomness: u8, rng: &mut Random) -> bool {
    if randomness == 0 {
        return hit;
    }

    let amount = ((rng.next_byte() as u16 * randomness as u16) >> 8) as u8;
    let margin = level.abs_diff(threshold);
    if amount > margin {
        !hit
    } else {
        hit
    }
}
