//! Topographic drum pattern generation.
//!
//! A `PatternGenerator` blends a 5x5 map of authored drum patterns from two
//! coordinates, thresholds the result per part by density, optionally perturbs
//! it with seeded chaos, and packs triggers, accents, clock and reset into one
//! byte per pulse. A Euclidean generator runs alongside as an alternative output.

pub mod commands;
pub mod events;
pub mod generator;
pub mod grids;
pub mod sequencing;
pub mod settings;
pub mod system;

pub use commands::{CommandQueue, GeneratorCommand};
pub use events::{ClientEvent, ServerEvent, ServerEventQueue};
pub use generator::{
    accent_bit, trigger_bit, OutputMode, PatternGenerator, OUTPUT_BIT_CLOCK, OUTPUT_BIT_RESET,
    OUTPUT_TRIGGER_MASK,
};
pub use grids::{Part, NUM_PARTS, STEPS_PER_PATTERN};
pub use sequencing::{euclid_hit, ClockResolution, EuclideanPattern};
pub use settings::GeneratorSettings;
pub use system::GridsSystem;
