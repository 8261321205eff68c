use crossbeam::queue::SegQueue;
use std::sync::Arc;

use crate::commands::GeneratorCommand;
use crate::generator::OutputMode;
use crate::grids::Part;
use crate::sequencing::ClockResolution;

/// Client event - sent from a control surface to the generator
#[derive(Debug, Clone)]
pub struct ClientEvent {
    /// Target node (e.g., "map", "bd", "sd", "hh", "system")
    pub node: String,
    /// Event name (e.g., "set_x", "set_density", "set_resolution")
    pub event: String,
    /// Event parameter (for booleans: 0.0 = false, 1.0 = true)
    pub parameter: f32,
}

impl ClientEvent {
    pub fn new(node: &str, event: &str, parameter: f32) -> Self {
        Self {
            node: node.to_string(),
            event: event.to_string(),
            parameter,
        }
    }

    /// Get parameter as a generator value; clamping happens in the generator
    pub fn as_i32(&self) -> i32 {
        self.parameter.round() as i32
    }

    /// Get parameter as boolean (0.0 = false, non-zero = true)
    pub fn as_bool(&self) -> bool {
        self.parameter != 0.0
    }

    /// Translate into a generator command
    pub fn to_command(&self) -> Result<GeneratorCommand, String> {
        match (self.node.as_str(), self.event.as_str()) {
            ("map", "set_x") => Ok(GeneratorCommand::SetX(self.as_i32())),
            ("map", "set_y") => Ok(GeneratorCommand::SetY(self.as_i32())),
            ("chaos", "set_amount") | ("system", "set_randomness") => {
                Ok(GeneratorCommand::SetRandomness(self.as_i32()))
            }
            ("system", "set_resolution") => {
                let ppqn = self.as_i32().max(0) as u32;
                ClockResolution::from_ppqn(ppqn).map(GeneratorCommand::SetClockResolution)
            }
            ("system", "set_euclidean") => {
                let mode = if self.as_bool() {
                    OutputMode::Euclidean
                } else {
                    OutputMode::Grids
                };
                Ok(GeneratorCommand::SetOutputMode(mode))
            }
            ("system", "reset") => Ok(GeneratorCommand::Reset),
            (node, "set_density") => {
                let part: Part = node.parse()?;
                Ok(GeneratorCommand::SetDensity(part, self.as_i32()))
            }
            (node, event) => Err(format!("Unsupported event '{}' for node '{}'", event, node)),
        }
    }
}

// Server events for generator -> consumer communication
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// A step produced at least one trigger
    Step { step: u8, output: u8 },
    /// The pattern wrapped back to its first step
    Reset,
}

/// Lock-free event queue for generator -> consumer communication
/// Uses a multiple-producer, multiple-consumer queue from crossbeam
pub struct ServerEventQueue {
    queue: Arc<SegQueue<ServerEvent>>,
}

impl ServerEventQueue {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(SegQueue::new()),
        }
    }

    /// Get a handle for sending events (for the clock thread)
    pub fn sender(&self) -> ServerEventSender {
        ServerEventSender {
            queue: Arc::clone(&self.queue),
        }
    }

    /// Get a handle for receiving events (for consumers)
    pub fn receiver(&self) -> ServerEventReceiver {
        ServerEventReceiver {
            queue: Arc::clone(&self.queue),
        }
    }
}

impl Default for ServerEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for the clock thread
#[derive(Clone)]
pub struct ServerEventSender {
    queue: Arc<SegQueue<ServerEvent>>,
}

impl ServerEventSender {
    /// Send an event to the consumer (non-blocking)
    pub fn send(&self, event: ServerEvent) {
        self.queue.push(event);
    }
}

/// Receiver handle for consumers
pub struct ServerEventReceiver {
    queue: Arc<SegQueue<ServerEvent>>,
}

impl ServerEventReceiver {
    /// Process all pending events
    pub fn process_events<F>(&self, mut emit_event: F)
    where
        F: FnMut(ServerEvent),
    {
        while let Some(event) = self.queue.pop() {
            emit_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_events() {
        let command = ClientEvent::new("map", "set_x", 227.6).to_command();
        assert_eq!(command, Ok(GeneratorCommand::SetX(228)));

        let command = ClientEvent::new("map", "set_y", -4.0).to_command();
        assert_eq!(command, Ok(GeneratorCommand::SetY(-4)));
    }

    #[test]
    fn test_density_events_address_parts() {
        assert_eq!(
            ClientEvent::new("bd", "set_density", 95.0).to_command(),
            Ok(GeneratorCommand::SetDensity(Part::BassDrum, 95))
        );
        assert_eq!(
            ClientEvent::new("hh", "set_density", 228.0).to_command(),
            Ok(GeneratorCommand::SetDensity(Part::HiHat, 228))
        );
        assert!(ClientEvent::new("cowbell", "set_density", 1.0).to_command().is_err());
    }

    #[test]
    fn test_system_events() {
        assert_eq!(
            ClientEvent::new("chaos", "set_amount", 8.0).to_command(),
            Ok(GeneratorCommand::SetRandomness(8))
        );
        assert_eq!(
            ClientEvent::new("system", "set_resolution", 24.0).to_command(),
            Ok(GeneratorCommand::SetClockResolution(ClockResolution::Ppqn24))
        );
        assert!(ClientEvent::new("system", "set_resolution", 96.0).to_command().is_err());
        assert_eq!(
            ClientEvent::new("system", "set_euclidean", 1.0).to_command(),
            Ok(GeneratorCommand::SetOutputMode(OutputMode::Euclidean))
        );
        assert_eq!(
            ClientEvent::new("system", "set_euclidean", 0.0).to_command(),
            Ok(GeneratorCommand::SetOutputMode(OutputMode::Grids))
        );
        assert_eq!(
            ClientEvent::new("system", "reset", 1.0).to_command(),
            Ok(GeneratorCommand::Reset)
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let err = ClientEvent::new("map", "set_z", 1.0).to_command().unwrap_err();
        assert_eq!(err, "Unsupported event 'set_z' for node 'map'");
    }

    #[test]
    fn test_server_event_queue() {
        let queue = ServerEventQueue::new();
        let sender = queue.sender();
        sender.send(ServerEvent::Reset);
        sender.send(ServerEvent::Step { step: 3, output: 0x41 });

        let mut events = Vec::new();
        queue.receiver().process_events(|e| events.push(e));
        assert_eq!(
            events,
            vec![ServerEvent::Reset, ServerEvent::Step { step: 3, output: 0x41 }]
        );
    }
}
