//! Reindeer - one holiday, one trip home, one hitching.

use super::messages::{Event, ReindeerEvent};
use crate::core::Result;
use crate::utils::delay::pause;
use crate::workshop::Workshop;

pub struct ReindeerActor<'a> {
    id: u16,
    workshop: &'a Workshop,
}

impl<'a> ReindeerActor<'a> {
    pub const fn new(id: u16, workshop: &'a Workshop) -> Self {
        Self { id, workshop }
    }

    pub fn run(self) -> Result<()> {
        let signals = self.workshop.signals();
        let state = self.workshop.state();

        self.emit(ReindeerEvent::Started)?;
        pause(self.workshop.params().reindeer_holiday(), self.workshop.unit());

        self.emit(ReindeerEvent::ReturnHome)?;
        if state.mark_reindeer_home() {
            signals.wake_coordinator.release();
        }

        signals.release_reindeer.acquire()?;
        self.emit(ReindeerEvent::Hitched)?;
        if state.mark_reindeer_hitched() {
            signals.christmas_ready.release();
        }
        Ok(())
    }

    fn emit(&self, event: ReindeerEvent) -> Result<()> {
        self.workshop.journal().emit(Event::Reindeer(self.id, event))?;
        Ok(())
    }
}
