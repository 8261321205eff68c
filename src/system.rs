use crate::commands::CommandReceiver;
use crate::events::{ClientEvent, ServerEvent, ServerEventSender};
use crate::generator::{PatternGenerator, OUTPUT_BIT_RESET, OUTPUT_TRIGGER_MASK};

/// Runs a generator on the host clock thread.
///
/// Parameter changes arrive through the command queue and are applied between
/// pulses; triggers leave through the event queue. Nothing else touches the
/// generator, so no locking is involved.
pub struct GridsSystem {
    generator: PatternGenerator,
    command_receiver: CommandReceiver,
    event_sender: ServerEventSender,
    is_paused: bool,
}

impl GridsSystem {
    pub fn new(
        generator: PatternGenerator,
        command_receiver: CommandReceiver,
        event_sender: ServerEventSender,
    ) -> Self {
        Self {
            generator,
            command_receiver,
            event_sender,
            is_paused: false,
        }
    }

    /// Handle one host clock pulse and return the generator output for it
    pub fn on_pulse(&mut self) -> u8 {
        let generator = &mut self.generator;
        self.command_receiver
            .process_commands(|command| command.apply(generator));

        if self.is_paused {
            return 0;
        }

        self.generator.tick_clock();
        let output = self.generator.output();

        if output & OUTPUT_BIT_RESET != 0 {
            self.event_sender.send(ServerEvent::Reset);
        }
        if output & OUTPUT_TRIGGER_MASK != 0 {
            self.event_sender.send(ServerEvent::Step {
                step: self.generator.step() as u8,
                output,
            });
        }
        output
    }

    /// Apply a control-surface event right away
    pub fn handle_client_event(&mut self, event: &ClientEvent) -> Result<(), String> {
        match event.to_command() {
            Ok(command) => {
                command.apply(&mut self.generator);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected client event {:?}: {}", event, e);
                Err(e)
            }
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn generator(&self) -> &PatternGenerator {
        &self.generator
    }
}
