use serde::{Deserialize, Serialize};

/// Host clock rates the pattern can follow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockResolution {
    #[default]
    #[serde(rename = "4ppqn")]
    Ppqn4,
    #[serde(rename = "8ppqn")]
    Ppqn8,
    #[serde(rename = "24ppqn")]
    Ppqn24,
}

impl ClockResolution {
    pub const ALL: [ClockResolution; 3] = [
        ClockResolution::Ppqn4,
        ClockResolution::Ppqn8,
        ClockResolution::Ppqn24,
    ];

    /// Host pulses that make up one pattern step
    pub fn pulses_per_step(self) -> u32 {
        match self {
            ClockResolution::Ppqn4 => 1,
            ClockResolution::Ppqn8 => 2,
            ClockResolution::Ppqn24 => 3,
        }
    }

    pub fn ppqn(self) -> u32 {
        match self {
            ClockResolution::Ppqn4 => 4,
            ClockResolution::Ppqn8 => 8,
            ClockResolution::Ppqn24 => 24,
        }
    }

    pub fn from_ppqn(ppqn: u32) -> Result<Self, String> {
        match ppqn {
            4 => Ok(ClockResolution::Ppqn4),
            8 => Ok(ClockResolution::Ppqn8),
            24 => Ok(ClockResolution::Ppqn24),
            _ => Err(format!("Unsupported clock resolution: {} PPQN", ppqn)),
        }
    }
}

/// Divides host clock pulses into pattern steps
#[derive(Debug, Clone)]
pub struct StepClock {
    total_steps: u32,
    pulses_per_step: u32,
    pulse: u32,
    step: u32,
}

impl StepClock {
    pub fn new(total_steps: u32, resolution: ClockResolution) -> Self {
        Self {
            total_steps: total_steps.max(1),
            pulses_per_step: resolution.pulses_per_step(),
            pulse: 0,
            step: 0,
        }
    }

    /// Count one host pulse. Returns the new step when a step boundary is crossed.
    pub fn tick(&mut self) -> Option<u32> {
        self.pulse += 1;
        if self.pulse < self.pulses_per_step {
            return None;
        }

        self.pulse = 0;
        self.step = (self.step + 1) % self.total_steps;
        Some(self.step)
    }

    pub fn get_current_step(&self) -> u32 {
        self.step
    }

    pub fn get_pulse(&self) -> u32 {
        self.pulse
    }

    /// True on the first pulse of a step
    pub fn is_step_start(&self) -> bool {
        self.pulse == 0
    }

    /// Change the pulse rate. The pulse phase restarts; the step is kept.
    pub fn set_resolution(&mut self, resolution: ClockResolution) {
        self.pulses_per_step = resolution.pulses_per_step();
        self.pulse = 0;
    }

    pub fn reset(&mut self) {
        self.pulse = 0;
        self.step = 0;
    }
}
