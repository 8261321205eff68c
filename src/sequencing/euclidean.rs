/// Longest pattern an `EuclideanPattern` mask can hold
pub const MAX_EUCLIDEAN_STEPS: u32 = 32;

/// Whether `step` of a Euclidean rhythm with `fill` beats over `steps` steps is a hit.
///
/// An accumulator gains `fill` on every step, modulo `steps`; a step is a hit when
/// the accumulator wrapped on the way to it. Step 0 always starts the pattern.
pub fn euclid_hit(step: u32, fill: u32, steps: u32) -> bool {
    if steps == 0 {
        return false;
    }
    let fill = fill.min(steps) as u64;
    let step = (step % steps) as u64;
    (step * fill) % (steps as u64) < fill
}

/// Scale an 8-bit density into a beat count in `[0, steps]`
pub fn euclidean_fill(density: u8, steps: u32) -> u32 {
    (density as u32 * (steps + 1)) >> 8
}

/// Euclidean rhythm distributing `beats` as evenly as possible across `steps`,
/// precomputed into a bit mask (bit n = step n)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuclideanPattern {
    steps: u32,
    beats: u32,
    mask: u32,
}

impl EuclideanPattern {
    /// Steps are clamped to 1..=32 and beats to the step count
    pub fn new(steps: u32, beats: u32) -> Self {
        let steps = steps.clamp(1, MAX_EUCLIDEAN_STEPS);
        let beats = beats.min(steps);
        let mask = (0..steps)
            .filter(|&step| euclid_hit(step, beats, steps))
            .fold(0u32, |mask, step| mask | (1 << step));
        Self { steps, beats, mask }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn beats(&self) -> u32 {
        self.beats
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Hit test for any step; wraps at the pattern length
    pub fn is_hit(&self, step: u32) -> bool {
        self.mask & (1 << (step % self.steps)) != 0
    }

    /// Steps that trigger, in order
    pub fn hits(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.steps).filter(move |&step| self.is_hit(step))
    }
}
