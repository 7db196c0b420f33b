//! The fixed set of blocking signals the protocol rendezvous on.
//!
//! | signal              | initial | posted by                                   |
//! |---------------------|---------|---------------------------------------------|
//! | `wake_coordinator`  | 0       | third elf of a group, last reindeer home    |
//! | `release_reindeer`  | 0       | santa, once per reindeer when hitching      |
//! | `release_elf_group` | 0       | santa, once per elf served or sent away     |
//! | `group_drained`     | 0       | last elf leaving a help round               |
//! | `christmas_ready`   | 0       | last reindeer hitched                       |
//! | `elf_gate`          | 3       | last elf of a round (x3), santa at closing  |
//!
//! The journal lock serializing log lines lives in
//! [`Journal`](crate::workshop::Journal).

use super::Semaphore;
use crate::workshop::HELP_GROUP_SIZE;

#[derive(Debug)]
pub struct SignalSet {
    pub wake_coordinator: Semaphore,
    pub release_reindeer: Semaphore,
    pub release_elf_group: Semaphore,
    pub group_drained: Semaphore,
    pub christmas_ready: Semaphore,
    /// Admission to the help queue, at most one group's worth of elves.
    pub elf_gate: Semaphore,
}

impl SignalSet {
    pub const fn new() -> Self {
        Self {
            wake_coordinator: Semaphore::new(0),
            release_reindeer: Semaphore::new(0),
            release_elf_group: Semaphore::new(0),
            group_drained: Semaphore::new(0),
            christmas_ready: Semaphore::new(0),
            elf_gate: Semaphore::new(HELP_GROUP_SIZE),
        }
    }

    fn all(&self) -> [&Semaphore; 6] {
        [
            &self.wake_coordinator,
            &self.release_reindeer,
            &self.release_elf_group,
            &self.group_drained,
            &self.christmas_ready,
            &self.elf_gate,
        ]
    }

    /// Close every signal. Blocked actors wake with `Closed` and unwind.
    pub fn cancel(&self) {
        for signal in self.all() {
            signal.close();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.all().iter().any(|signal| signal.is_closed())
    }
}

impl Default for SignalSet {
    fn default() -> Self {
        Self::new()
    }
}
