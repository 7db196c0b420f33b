//! Santa - the coordinator.
//!
//! ```text
//! Sleeping --(3 elves waiting)--> Helping --(group drained)--> Sleeping
//!    |
//!    +--(all reindeer home)--> Closing --> Hitching --> ChristmasStarted
//! ```

use super::messages::{Event, SantaEvent};
use crate::core::Result;
use crate::workshop::{Decision, HELP_GROUP_SIZE, Workshop};

pub struct SantaActor<'a> {
    workshop: &'a Workshop,
}

impl<'a> SantaActor<'a> {
    pub const fn new(workshop: &'a Workshop) -> Self {
        Self { workshop }
    }

    pub fn run(self) -> Result<()> {
        let signals = self.workshop.signals();

        loop {
            self.emit(SantaEvent::Sleeping)?;
            signals.wake_coordinator.acquire()?;

            let decision = self.workshop.state().decide(|decision| {
                match decision {
                    Decision::Close { .. } => self.emit(SantaEvent::Closing),
                    Decision::Help => self.emit(SantaEvent::Helping),
                    Decision::Idle => Ok(()),
                }
            })?;

            match decision {
                Decision::Close { stragglers } => {
                    crate::debug!("santa"; "closing, sending {} waiting elves away", stragglers);
                    signals.release_elf_group.release_many(stragglers);
                    // elves queued at the gate see the closed workshop and leave
                    signals
                        .elf_gate
                        .release_many(usize::from(self.workshop.params().elves));
                    break;
                }
                Decision::Help => {
                    signals.release_elf_group.release_many(HELP_GROUP_SIZE);
                    signals.group_drained.acquire()?;
                }
                Decision::Idle => {
                    crate::debug!(
                        "santa";
                        "spurious wake-up: {:?}, {} gate permits left",
                        self.workshop.state().snapshot(),
                        signals.elf_gate.available()
                    );
                }
            }
        }

        signals
            .release_reindeer
            .release_many(usize::from(self.workshop.params().reindeer));
        signals.christmas_ready.acquire()?;

        self.emit(SantaEvent::ChristmasStarted)
    }

    fn emit(&self, event: SantaEvent) -> Result<()> {
        self.workshop.journal().emit(Event::Santa(event))?;
        Ok(())
    }
}
