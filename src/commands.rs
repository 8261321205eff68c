use crossbeam::queue::SegQueue;
use std::sync::Arc;

use crate::generator::{OutputMode, PatternGenerator};
use crate::grids::Part;
use crate::sequencing::ClockResolution;

/// Commands drained per pulse, so a burst of UI changes can't stall the clock
const MAX_COMMANDS_PER_PULSE: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorCommand {
    SetX(i32),
    SetY(i32),
    SetDensity(Part, i32),
    SetRandomness(i32),
    SetClockResolution(ClockResolution),
    SetOutputMode(OutputMode),
    Reset,
}

impl GeneratorCommand {
    pub fn apply(&self, generator: &mut PatternGenerator) {
        match *self {
            GeneratorCommand::SetX(x) => generator.set_x(x),
            GeneratorCommand::SetY(y) => generator.set_y(y),
            GeneratorCommand::SetDensity(part, density) => generator.set_density(part, density),
            GeneratorCommand::SetRandomness(randomness) => generator.set_randomness(randomness),
            GeneratorCommand::SetClockResolution(resolution) => {
                generator.set_clock_resolution(resolution)
            }
            GeneratorCommand::SetOutputMode(mode) => generator.set_output_mode(mode),
            GeneratorCommand::Reset => generator.reset(),
        }
    }
}

/// Lock-free command queue for parameter changes
/// Uses a multiple-producer, single-consumer queue from crossbeam
pub struct CommandQueue {
    queue: Arc<SegQueue<GeneratorCommand>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(SegQueue::new()),
        }
    }

    /// Get a handle for sending commands (for control threads)
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            queue: Arc::clone(&self.queue),
        }
    }

    /// Get a handle for receiving commands (for the clock thread)
    pub fn receiver(&self) -> CommandReceiver {
        CommandReceiver {
            queue: Arc::clone(&self.queue),
        }
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for control threads
#[derive(Clone)]
pub struct CommandSender {
    queue: Arc<SegQueue<GeneratorCommand>>,
}

impl CommandSender {
    /// Send a command to the clock thread (non-blocking)
    pub fn send(&self, command: GeneratorCommand) {
        self.queue.push(command);
    }
}

/// Receiver handle for the clock thread
pub struct CommandReceiver {
    queue: Arc<SegQueue<GeneratorCommand>>,
}

impl CommandReceiver {
    /// Process pending commands, handing each to `apply_command`.
    /// Returns how many were processed.
    pub fn process_commands<F>(&self, mut apply_command: F) -> usize
    where
        F: FnMut(GeneratorCommand),
    {
        let mut processed = 0;
        while processed < MAX_COMMANDS_PER_PULSE {
            match self.queue.pop() {
                Some(command) => {
                    apply_command(command);
                    processed += 1;
                }
                None => break,
            }
        }
        processed
    }

    /// Check if there are pending commands
    pub fn has_commands(&self) -> bool {
        !self.queue.is_empty()
    }
}
