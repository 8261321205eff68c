use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::{OutputMode, PatternGenerator};
use crate::grids::{Part, NUM_PARTS};
use crate::sequencing::ClockResolution;

/// Snapshot of every generator parameter, stored as JSON.
///
/// Numeric values outside `[0, 255]` are accepted and clamped when applied.
/// Missing fields fall back to the generator defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub x: i32,
    pub y: i32,
    pub density: [i32; NUM_PARTS],
    pub randomness: i32,
    /// Chaos seed; `None` seeds from entropy
    pub seed: Option<u32>,
    pub resolution: ClockResolution,
    pub mode: OutputMode,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            x: 128,
            y: 128,
            density: [128; NUM_PARTS],
            randomness: 0,
            seed: None,
            resolution: ClockResolution::default(),
            mode: OutputMode::default(),
        }
    }
}

impl GeneratorSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid generator settings: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to encode settings: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded generator settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        fs::write(path, self.to_json()?)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Saved generator settings to {}", path.display());
        Ok(())
    }

    /// Copy the parameters onto an existing generator, keeping its step and chaos state
    pub fn apply_to(&self, generator: &mut PatternGenerator) {
        generator.set_x(self.x);
        generator.set_y(self.y);
        for part in Part::ALL {
            generator.set_density(part, self.density[part.index()]);
        }
        generator.set_randomness(self.randomness);
        generator.set_clock_resolution(self.resolution);
        generator.set_output_mode(self.mode);
    }
}

impl PatternGenerator {
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        let mut generator = match settings.seed {
            Some(seed) => PatternGenerator::with_seed(seed),
            None => PatternGenerator::with_random_seed(),
        };
        settings.apply_to(&mut generator);
        generator
    }

    /// Current parameters. The seed is not recoverable from a running
    /// generator, so it is left unset.
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            x: self.x() as i32,
            y: self.y() as i32,
            density: Part::ALL.map(|part| self.density(part) as i32),
            randomness: self.randomness() as i32,
            seed: None,
            resolution: self.clock_resolution(),
            mode: self.output_mode(),
        }
    }
}
