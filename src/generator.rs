use serde::{Deserialize, Serialize};

use crate::grids::{
    decide, hit_threshold, interpolate, perturb, Part, PatternTable, Random, DEFAULT_SEED,
    NUM_PARTS, PATTERN_TABLE, STEPS_PER_PATTERN,
};
use crate::sequencing::{euclid_hit, euclidean_fill, ClockResolution, EuclideanPattern, StepClock};

/// Set on every evaluated step
pub const OUTPUT_BIT_CLOCK: u8 = 1 << 6;
/// Set on the first step of the pattern
pub const OUTPUT_BIT_RESET: u8 = 1 << 7;
/// Mask of the three trigger bits
pub const OUTPUT_TRIGGER_MASK: u8 = 0b0000_0111;

const ACCENT_SHIFT: usize = 3;

/// Output bit carrying the trigger of `part`
pub fn trigger_bit(part: Part) -> u8 {
    1 << part.index()
}

/// Output bit carrying the accent of `part`
pub fn accent_bit(part: Part) -> u8 {
    1 << (part.index() + ACCENT_SHIFT)
}

/// Which algorithm `PatternGenerator::output` reads from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Grids,
    Euclidean,
}

fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Topographic drum pattern generator for three parts.
///
/// Parameters are stored as-is and only read when a step is evaluated. The host
/// calls `tick_clock` once per clock pulse, then `evaluate` (or `output`) to read
/// the packed trigger byte for that pulse.
pub struct PatternGenerator {
    table: &'static PatternTable,

    // Map position and per-part fill
    x: u8,
    y: u8,
    density: [u8; NUM_PARTS],
    randomness: u8,

    clock: StepClock,
    resolution: ClockResolution,
    output_mode: OutputMode,

    rng: Random,
}

impl PatternGenerator {
    /// Generator seeded with `DEFAULT_SEED`, so runs can be replayed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::with_random(Random::new(seed))
    }

    /// Generator whose chaos sequence differs from run to run
    pub fn with_random_seed() -> Self {
        Self::with_random(Random::from_entropy())
    }

    fn with_random(rng: Random) -> Self {
        let resolution = ClockResolution::default();
        Self {
            table: &PATTERN_TABLE,
            x: 128,
            y: 128,
            density: [128; NUM_PARTS],
            randomness: 0,
            clock: StepClock::new(STEPS_PER_PATTERN as u32, resolution),
            resolution,
            output_mode: OutputMode::default(),
            rng,
        }
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = clamp_u8(x);
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = clamp_u8(y);
    }

    pub fn set_density(&mut self, part: Part, density: i32) {
        self.density[part.index()] = clamp_u8(density);
    }

    pub fn set_randomness(&mut self, randomness: i32) {
        self.randomness = clamp_u8(randomness);
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn density(&self, part: Part) -> u8 {
        self.density[part.index()]
    }

    pub fn randomness(&self) -> u8 {
        self.randomness
    }

    /// Current step, always in `[0, STEPS_PER_PATTERN)`
    pub fn step(&self) -> usize {
        self.clock.get_current_step() as usize
    }

    /// Internal state of the chaos sequence
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    pub fn set_clock_resolution(&mut self, resolution: ClockResolution) {
        if resolution != self.resolution {
            log::debug!("Clock resolution set to {} PPQN", resolution.ppqn());
        }
        self.resolution = resolution;
        self.clock.set_resolution(resolution);
    }

    pub fn clock_resolution(&self) -> ClockResolution {
        self.resolution
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        if mode != self.output_mode {
            log::debug!("Output mode set to {:?}", mode);
        }
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Advance by one host clock pulse
    pub fn tick_clock(&mut self) {
        self.clock.tick();
    }

    /// Return to the first step of the pattern. Parameters and the chaos
    /// sequence are left untouched.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Interpolated level of `part` at the current step, before density and chaos
    pub fn level(&self, part: Part) -> u8 {
        interpolate(self.table, self.x, self.y, self.step(), part)
    }

    /// Evaluate the map for the current step.
    ///
    /// Bits 0-2 are triggers, bits 3-5 accents, bit 6 the clock and bit 7 the
    /// reset flag. Pulses inside a step (coarser resolutions) return 0. Draws
    /// three chaos bytes when randomness is nonzero.
    pub fn evaluate(&mut self) -> u8 {
        if !self.clock.is_step_start() {
            return 0;
        }

        let step = self.step();
        let mut state = 0u8;
        for part in Part::ALL {
            let level = interpolate(self.table, self.x, self.y, step, part);
            let density = self.density[part.index()];
            let decision = decide(level, density);
            let hit = perturb(
                decision.hit,
                level,
                hit_threshold(density),
                self.randomness,
                &mut self.rng,
            );

            if hit {
                state |= trigger_bit(part);
                if decision.accent {
                    state |= accent_bit(part);
                }
            }
        }

        self.with_clock_flags(state)
    }

    /// Euclidean triggers for the current step, with each part's density
    /// setting its number of beats. Never sets accents and draws no chaos.
    pub fn evaluate_euclidean(&self) -> u8 {
        if !self.clock.is_step_start() {
            return 0;
        }

        let step = self.clock.get_current_step();
        let steps = STEPS_PER_PATTERN as u32;
        let mut state = 0u8;
        for part in Part::ALL {
            let fill = euclidean_fill(self.density[part.index()], steps);
            if euclid_hit(step, fill, steps) {
                state |= trigger_bit(part);
            }
        }

        self.with_clock_flags(state)
    }

    /// Evaluate with whichever algorithm the output mode selects
    pub fn output(&mut self) -> u8 {
        match self.output_mode {
            OutputMode::Grids => self.evaluate(),
            OutputMode::Euclidean => self.evaluate_euclidean(),
        }
    }

    /// Full Euclidean pattern `part` currently plays
    pub fn euclidean_pattern(&self, part: Part) -> EuclideanPattern {
        let steps = STEPS_PER_PATTERN as u32;
        EuclideanPattern::new(steps, euclidean_fill(self.density[part.index()], steps))
    }

    fn with_clock_flags(&self, state: u8) -> u8 {
        let mut state = state | OUTPUT_BIT_CLOCK;
        if self.step() == 0 {
            state |= OUTPUT_BIT_RESET;
        }
        state
    }
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_cycle(generator: &mut PatternGenerator) -> Vec<u8> {
        (0..STEPS_PER_PATTERN)
            .map(|_| {
                generator.tick_clock();
                generator.evaluate()
            })
            .collect()
    }

    fn golden_generator() -> PatternGenerator {
        let mut generator = PatternGenerator::new();
        generator.set_x(228);
        generator.set_y(123);
        generator.set_density(Part::BassDrum, 95);
        generator.set_density(Part::SnareDrum, 182);
        generator.set_density(Part::HiHat, 228);
        generator.set_randomness(8);
        generator
    }

    #[test]
    fn test_first_step_of_default_pattern() {
        let mut generator = PatternGenerator::new();
        // Accented kick, plus clock and reset
        assert_eq!(generator.evaluate(), 0xC9);
    }

    #[test]
    fn test_default_pattern_cycle() {
        let mut generator = PatternGenerator::new();
        let outputs = run_cycle(&mut generator);
        assert_eq!(
            outputs,
            vec![
                0x40, 0x40, 0x40, 0x64, 0x40, 0x40, 0x40, 0x56, 0x40, 0x40, 0x40, 0x65, 0x40,
                0x40, 0x40, 0x49, 0x40, 0x40, 0x40, 0x67, 0x40, 0x40, 0x40, 0x56, 0x40, 0x52,
                0x40, 0x46, 0x40, 0x40, 0x40, 0xC9,
            ]
        );
    }

    #[test]
    fn test_golden_chaos_sequence() {
        let mut generator = golden_generator();
        let outputs = run_cycle(&mut generator);
        assert_eq!(
            outputs,
            vec![
                0x40, 0x44, 0x40, 0x44, 0x40, 0x44, 0x40, 0x46, 0x40, 0x40, 0x40, 0x46, 0x40,
                0x42, 0x40, 0x4F, 0x40, 0x64, 0x40, 0x44, 0x40, 0x42, 0x40, 0x45, 0x40, 0x42,
                0x40, 0x66, 0x40, 0x40, 0x40, 0xCD,
            ]
        );

        let rows: Vec<String> = Part::ALL
            .iter()
            .map(|&part| {
                outputs
                    .iter()
                    .map(|&o| if o & trigger_bit(part) != 0 { '*' } else { '-' })
                    .collect()
            })
            .collect();
        assert_eq!(rows[0], "---------------*-------*-------*");
        assert_eq!(rows[1], "-------*---*-*-*-----*---*-*----");
        assert_eq!(rows[2], "-*-*-*-*---*---*-*-*---*---*---*");

        // Three chaos draws per step
        let mut expected_rng = Random::default();
        for _ in 0..STEPS_PER_PATTERN * NUM_PARTS {
            expected_rng.next_u32();
        }
        assert_eq!(generator.rng_state(), expected_rng.state());
        assert_eq!(generator.rng_state(), 1_321_164_673);
    }

    #[test]
    fn test_chaos_changes_the_golden_pattern() {
        let mut calm = golden_generator();
        calm.set_randomness(0);
        let calm_outputs = run_cycle(&mut calm);
        let chaotic_outputs = run_cycle(&mut golden_generator());

        let changed: Vec<usize> = (0..STEPS_PER_PATTERN)
            .filter(|&i| calm_outputs[i] != chaotic_outputs[i])
            .collect();
        assert_eq!(changed, vec![9, 23]);
    }

    #[test]
    fn test_zero_randomness_is_pure() {
        let mut generator = golden_generator();
        generator.set_randomness(0);
        let rng_before = generator.rng_state();

        for _ in 0..STEPS_PER_PATTERN {
            generator.tick_clock();
            let first = generator.evaluate();
            for _ in 0..4 {
                assert_eq!(generator.evaluate(), first, "Re-evaluating step {} changed", generator.step());
            }
        }
        assert_eq!(generator.rng_state(), rng_before);
    }

    #[test]
    fn test_fixed_seed_replays() {
        let run = |seed: u32| {
            let mut generator = PatternGenerator::with_seed(seed);
            generator.set_randomness(200);
            let mut outputs = Vec::new();
            for i in 0..96 {
                generator.set_x(i * 3);
                generator.set_y(255 - i * 2);
                generator.tick_clock();
                outputs.push(generator.evaluate());
            }
            outputs
        };
        assert_eq!(run(1234), run(1234));
        assert_eq!(run(DEFAULT_SEED), run(DEFAULT_SEED));
    }

    #[test]
    fn test_reset_flag_only_on_first_step() {
        for &(x, y, density, randomness) in &[
            (0, 0, 0, 0),
            (128, 128, 128, 0),
            (255, 255, 255, 255),
            (17, 240, 200, 100),
        ] {
            let mut generator = PatternGenerator::with_seed(99);
            generator.set_x(x);
            generator.set_y(y);
            for part in Part::ALL {
                generator.set_density(part, density);
            }
            generator.set_randomness(randomness);

            for _ in 0..STEPS_PER_PATTERN * 2 {
                generator.tick_clock();
                let output = generator.evaluate();
                assert_ne!(output & OUTPUT_BIT_CLOCK, 0);
                assert_eq!(
                    output & OUTPUT_BIT_RESET != 0,
                    generator.step() == 0,
                    "Reset flag wrong at step {}",
                    generator.step()
                );
            }
        }
    }

    #[test]
    fn test_accents_follow_triggers() {
        let mut generator = PatternGenerator::with_seed(5);
        generator.set_randomness(255);
        for part in Part::ALL {
            generator.set_density(part, 255);
        }
        for _ in 0..STEPS_PER_PATTERN * 4 {
            generator.tick_clock();
            let output = generator.evaluate();
            for part in Part::ALL {
                if output & accent_bit(part) != 0 {
                    assert_ne!(output & trigger_bit(part), 0, "{} accent without trigger", part);
                }
            }
        }
    }

    #[test]
    fn test_setters_clamp() {
        let mut generator = PatternGenerator::new();
        generator.set_x(300);
        generator.set_y(-20);
        generator.set_density(Part::SnareDrum, 1000);
        generator.set_randomness(-1);
        assert_eq!(generator.x(), 255);
        assert_eq!(generator.y(), 0);
        assert_eq!(generator.density(Part::SnareDrum), 255);
        assert_eq!(generator.density(Part::BassDrum), 128);
        assert_eq!(generator.randomness(), 0);
    }

    #[test]
    fn test_silent_part_at_zero_density() {
        let mut generator = PatternGenerator::new();
        generator.set_density(Part::HiHat, 0);
        for output in run_cycle(&mut generator) {
            assert_eq!(output & trigger_bit(Part::HiHat), 0);
        }
    }

    #[test]
    fn test_coarse_resolution_only_evaluates_step_starts() {
        let mut generator = PatternGenerator::new();
        generator.set_randomness(100);
        generator.set_clock_resolution(ClockResolution::Ppqn24);

        let mut outputs = Vec::new();
        for _ in 0..STEPS_PER_PATTERN * 3 {
            generator.tick_clock();
            let rng_before = generator.rng_state();
            let output = generator.evaluate();
            if output == 0 {
                assert_eq!(generator.rng_state(), rng_before, "Mid-step pulse drew chaos");
            } else {
                outputs.push(output);
            }
        }
        assert_eq!(outputs.len(), STEPS_PER_PATTERN);
        assert_eq!(generator.step(), 0);
    }

    #[test]
    fn test_euclidean_output() {
        let mut generator = golden_generator();
        generator.set_output_mode(OutputMode::Euclidean);
        let rng_before = generator.rng_state();

        let outputs: Vec<u8> = (0..STEPS_PER_PATTERN)
            .map(|_| {
                generator.tick_clock();
                generator.output()
            })
            .collect();
        assert_eq!(
            outputs,
            vec![
                0x40, 0x46, 0x47, 0x44, 0x46, 0x47, 0x46, 0x45, 0x46, 0x46, 0x41, 0x46, 0x46,
                0x47, 0x44, 0x47, 0x46, 0x44, 0x47, 0x46, 0x46, 0x41, 0x46, 0x47, 0x44, 0x46,
                0x47, 0x46, 0x44, 0x47, 0x46, 0xC7,
            ]
        );
        assert_eq!(generator.rng_state(), rng_before);

        assert_eq!(generator.euclidean_pattern(Part::BassDrum).beats(), 12);
        assert_eq!(generator.euclidean_pattern(Part::SnareDrum).beats(), 23);
        assert_eq!(generator.euclidean_pattern(Part::HiHat).beats(), 29);
    }

    #[test]
    fn test_output_dispatches_on_mode() {
        let mut grids = golden_generator();
        let mut euclidean = golden_generator();
        euclidean.set_output_mode(OutputMode::Euclidean);
        let mut reference = golden_generator();

        for _ in 0..STEPS_PER_PATTERN {
            grids.tick_clock();
            euclidean.tick_clock();
            reference.tick_clock();
            assert_eq!(grids.output(), reference.evaluate());
            assert_eq!(euclidean.output(), reference.evaluate_euclidean());
        }
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut generator = PatternGenerator::new();
        for _ in 0..5 {
            generator.tick_clock();
        }
        assert_eq!(generator.step(), 5);
        generator.reset();
        assert_eq!(generator.step(), 0);
        assert_ne!(generator.evaluate() & OUTPUT_BIT_RESET, 0);
    }

    #[test]
    fn test_level_matches_interpolator() {
        let mut generator = golden_generator();
        generator.tick_clock();
        for part in Part::ALL {
            assert_eq!(
                generator.level(part),
                interpolate(&PATTERN_TABLE, 228, 123, 1, part)
            );
        }
    }
}
