//! Elf - works, asks for help in groups of three, leaves when the workshop
//! closes.
//!
//! ```text
//! Working --> NeedHelp --> WaitingForGroup --> GotHelp --> Working
//!                 |               |
//!                 +---------------+--(workshop closed)--> Holiday
//! ```

use super::messages::{ElfEvent, Event};
use crate::core::Result;
use crate::utils::delay::pause;
use crate::workshop::{HELP_GROUP_SIZE, JoinOutcome, Workshop};

pub struct ElfActor<'a> {
    id: u16,
    workshop: &'a Workshop,
}

impl<'a> ElfActor<'a> {
    pub const fn new(id: u16, workshop: &'a Workshop) -> Self {
        Self { id, workshop }
    }

    pub fn run(self) -> Result<()> {
        self.emit(ElfEvent::Started)?;
        while self.work_until_helped()? {}
        self.emit(ElfEvent::Holiday)
    }

    /// One work period and one request for help.
    ///
    /// Returns `false` once the workshop turned out to be closed.
    fn work_until_helped(&self) -> Result<bool> {
        let signals = self.workshop.signals();
        let state = self.workshop.state();

        pause(self.workshop.params().max_work, self.workshop.unit());
        self.emit(ElfEvent::NeedHelp)?;

        signals.elf_gate.acquire()?;
        match state.try_join_help_group() {
            JoinOutcome::Closed => return Ok(false),
            JoinOutcome::Joined { group_complete } => {
                if group_complete {
                    signals.wake_coordinator.release();
                }
            }
        }

        signals.release_elf_group.acquire()?;
        if !state.is_open() {
            return Ok(false);
        }

        self.emit(ElfEvent::GetHelp)?;
        if state.leave_help_group() {
            signals.elf_gate.release_many(HELP_GROUP_SIZE);
            signals.group_drained.release();
        }
        Ok(true)
    }

    fn emit(&self, event: ElfEvent) -> Result<()> {
        self.workshop.journal().emit(Event::Elf(self.id, event))?;
        Ok(())
    }
}
